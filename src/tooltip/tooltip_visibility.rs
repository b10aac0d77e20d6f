//! Per-frame tooltip visibility
//!
//! Decides once per frame whether the map tooltip overlay should be open, and
//! where. The overlay is reused across frames rather than recreated, so a
//! shown tooltip only moves.

use crate::coords::{ScreenCoords, ScreenSize};
use crate::input::{InputSource, InteractionMode};
use crate::theme::ThemeFlags;
use crate::window::{WindowClass, WindowFlags, WindowRegistry};

use super::tooltip_state::TooltipContext;

pub const TOOLTIP_WIDTH: i32 = 200;
pub const TOOLTIP_HEIGHT: i32 = 44;

/// Gap between the pointer and the top edge of the overlay
pub const TOOLTIP_CURSOR_OFFSET_Y: i32 = 15;

pub const TOOLTIP_SIZE: ScreenSize = ScreenSize::new(TOOLTIP_WIDTH, TOOLTIP_HEIGHT);

pub const TOOLTIP_FLAGS: WindowFlags = WindowFlags::STICK_TO_FRONT
    .union(WindowFlags::TRANSPARENT)
    .union(WindowFlags::NO_BACKGROUND);

/// What a frame's update did to the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityChange {
    /// Full bottom toolbar mode: the toolbar was invalidated instead
    Deferred,
    /// Overlay closed, or stayed closed
    Hidden,
    /// Overlay opened at this position
    Shown(ScreenCoords),
    /// Already open overlay moved here
    Moved(ScreenCoords),
    /// Already open overlay kept its position
    Unchanged,
}

impl VisibilityChange {
    pub fn is_visible(self) -> bool {
        matches!(
            self,
            VisibilityChange::Shown(_) | VisibilityChange::Moved(_) | VisibilityChange::Unchanged
        )
    }
}

/// Overlay top-left for a pointer position: centred horizontally, just below
pub fn tooltip_position(cursor: ScreenCoords) -> ScreenCoords {
    ScreenCoords::new(
        cursor.x.saturating_sub(TOOLTIP_WIDTH / 2),
        cursor.y.saturating_add(TOOLTIP_CURSOR_OFFSET_Y),
    )
}

/// Input states that keep the hold counter at zero
fn input_held<I: InputSource>(input: &I) -> bool {
    input.is_drag_in_progress() || input.interaction_mode() == InteractionMode::ViewportRight
}

impl TooltipContext {
    /// Run the visibility pass for one frame. Call once per frame, before
    /// drawing.
    pub fn update_visibility<I, W>(&mut self, theme: ThemeFlags, input: &I, windows: &mut W) -> VisibilityChange
    where
        I: InputSource,
        W: WindowRegistry,
    {
        if theme.contains(ThemeFlags::USE_FULL_BOTTOM_TOOLBAR) {
            // The toolbar draws the tooltip itself
            windows.invalidate_by_class(WindowClass::BottomToolbar);
            return VisibilityChange::Deferred;
        }

        let cursor = input.cursor_position();
        self.pointer.sample(cursor, input_held(input));

        #[cfg(debug_assertions)]
        log::trace!("Tooltip hold duration {} at {:?}", self.pointer.hold_duration(), cursor);

        if self.should_hide(input, windows) {
            // No-op when the overlay is already gone
            windows.close_by_class(WindowClass::MapTooltip);
            return VisibilityChange::Hidden;
        }

        let position = tooltip_position(cursor);
        let previous = windows
            .find_by_class(WindowClass::MapTooltip)
            .map(|w| w.position);

        let window = windows.focus_or_create(WindowClass::MapTooltip, position, TOOLTIP_SIZE, TOOLTIP_FLAGS);
        window.invalidate();
        window.position = position;
        window.size = TOOLTIP_SIZE;

        match previous {
            None => {
                #[cfg(debug_assertions)]
                log::debug!("Showing map tooltip at {:?}", position);
                VisibilityChange::Shown(position)
            }
            Some(old) if old != position => VisibilityChange::Moved(position),
            Some(_) => VisibilityChange::Unchanged,
        }
    }

    fn should_hide<I, W>(&self, input: &I, windows: &W) -> bool
    where
        I: InputSource,
        W: WindowRegistry,
    {
        !self.pointer.has_dwelled()
            || self.store.tooltip().is_none()
            || input.is_placing_object()
            || windows.find_by_class(WindowClass::Error).is_some()
    }
}

#[cfg(test)]
#[path = "tooltip_visibility_tests.rs"]
mod tooltip_visibility_tests;
