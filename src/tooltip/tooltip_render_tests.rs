//! Tests for tooltip/tooltip_render

use super::*;
use crate::coords::ScreenSize;
use crate::test_utils::test_helpers::tile_payload;
use crate::tooltip::tooltip_visibility::{TOOLTIP_FLAGS, TOOLTIP_SIZE};
use crate::window::WindowClass;

#[derive(Default)]
struct CapturedDraw {
    draws: Vec<(ScreenCoords, i32, StringId, TooltipPayload, TextAlignment)>,
}

impl TextRenderer for CapturedDraw {
    fn draw_text_wrapped(
        &mut self,
        anchor: ScreenCoords,
        width: i32,
        template: StringId,
        payload: &TooltipPayload,
        alignment: TextAlignment,
    ) {
        self.draws
            .push((anchor, width, template, payload.clone(), alignment));
    }
}

fn overlay_at(x: i32, y: i32) -> Window {
    Window::new(
        WindowClass::MapTooltip,
        ScreenCoords::new(x, y),
        TOOLTIP_SIZE,
        TOOLTIP_FLAGS,
    )
}

#[test]
fn test_sentinel_draws_nothing() {
    let store = TooltipStore::new();
    let mut text = CapturedDraw::default();

    assert!(!draw_tooltip(&store, &overlay_at(0, 0), &mut text));
    assert!(text.draws.is_empty());
}

#[test]
fn test_draws_centred_with_tooltip_template() {
    let mut store = TooltipStore::new();
    store.set_tooltip(tile_payload());
    let mut text = CapturedDraw::default();

    assert!(draw_tooltip(&store, &overlay_at(200, 215), &mut text));

    assert_eq!(text.draws.len(), 1);
    let (anchor, width, template, payload, alignment) = &text.draws[0];
    assert_eq!(*anchor, ScreenCoords::new(300, 237));
    assert_eq!(*width, 200);
    assert_eq!(*template, STR_MAP_TOOLTIP_STRINGID);
    assert_eq!(payload, &tile_payload(), "arguments pass through verbatim");
    assert_eq!(*alignment, TextAlignment::Centre);
}

#[test]
fn test_wrap_width_follows_window_width() {
    let mut store = TooltipStore::new();
    store.set_tooltip(tile_payload());
    let mut window = overlay_at(0, 0);
    window.size = ScreenSize::new(120, 30);
    let mut text = CapturedDraw::default();

    draw_tooltip(&store, &window, &mut text);

    assert_eq!(text.draws[0].0, ScreenCoords::new(60, 15));
    assert_eq!(text.draws[0].1, 120);
}
