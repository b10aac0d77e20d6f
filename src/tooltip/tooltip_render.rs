//! Overlay draw callback
//!
//! The overlay has no widgets of its own: it asks the host's text service to
//! draw the stored payload centred inside its bounds.

use crate::coords::ScreenCoords;
use crate::window::Window;

use super::tooltip_content::{STR_MAP_TOOLTIP_STRINGID, StringId, TooltipPayload, TooltipStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    Left,
    #[default]
    Centre,
    Right,
}

/// Text layout and drawing supplied by the host
pub trait TextRenderer {
    /// Draw `template` formatted with `payload`, wrapped to `width` pixels and
    /// anchored on `anchor` (the centre point for [`TextAlignment::Centre`]).
    fn draw_text_wrapped(
        &mut self,
        anchor: ScreenCoords,
        width: i32,
        template: StringId,
        payload: &TooltipPayload,
        alignment: TextAlignment,
    );
}

/// Draw the tooltip overlay's content. Returns false when there is nothing to
/// draw.
pub fn draw_tooltip<T: TextRenderer>(store: &TooltipStore, window: &Window, text: &mut T) -> bool {
    let payload = store.tooltip();
    if payload.is_none() {
        return false;
    }

    text.draw_text_wrapped(
        window.center(),
        window.size.width,
        STR_MAP_TOOLTIP_STRINGID,
        payload,
        TextAlignment::Centre,
    );
    true
}

#[cfg(test)]
#[path = "tooltip_render_tests.rs"]
mod tooltip_render_tests;
