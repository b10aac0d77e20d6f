//! Tests for tooltip/tooltip_visibility

use super::*;
use crate::input::{InputFlags, InputState, PlaceObjectModifier};
use crate::test_utils::test_helpers::{RecordingRegistry, tile_payload};
use crate::tooltip::{PointerSample, TooltipPayload};
use crate::window::WindowManager;
use insta::assert_snapshot;
use proptest::prelude::*;

const CURSOR: ScreenCoords = ScreenCoords::new(300, 200);

/// Context with content requested and the pointer already resting at `CURSOR`
fn resting_context() -> TooltipContext {
    let mut ctx = TooltipContext::new();
    ctx.store.set_tooltip(tile_payload());
    ctx.pointer = PointerSample::with_hold(CURSOR, 0);
    ctx
}

fn run_frames<W: WindowRegistry>(
    ctx: &mut TooltipContext,
    input: &InputState,
    windows: &mut W,
    frames: u32,
) -> VisibilityChange {
    let mut last = VisibilityChange::Hidden;
    for _ in 0..frames {
        last = ctx.update_visibility(ThemeFlags::empty(), input, windows);
    }
    last
}

fn overlay(windows: &WindowManager) -> Option<&crate::window::Window> {
    windows.find_by_class(WindowClass::MapTooltip)
}

#[test]
fn test_tooltip_position_centres_below_pointer() {
    assert_eq!(tooltip_position(CURSOR), ScreenCoords::new(200, 215));
    assert_eq!(tooltip_position(ScreenCoords::new(0, 0)), ScreenCoords::new(-100, 15));
}

#[test]
fn test_hidden_until_dwell_threshold() {
    let mut ctx = resting_context();
    let mut windows = WindowManager::new();
    let input = InputState::at(CURSOR);

    for frame in 1..=24 {
        let change = ctx.update_visibility(ThemeFlags::empty(), &input, &mut windows);
        assert_eq!(change, VisibilityChange::Hidden, "frame {}", frame);
        assert!(overlay(&windows).is_none(), "frame {}", frame);
    }
    assert_eq!(ctx.pointer.hold_duration(), 24);

    let change = ctx.update_visibility(ThemeFlags::empty(), &input, &mut windows);
    let expected = ScreenCoords::new(CURSOR.x - 100, CURSOR.y + 15);
    assert_eq!(change, VisibilityChange::Shown(expected));

    let window = overlay(&windows).expect("overlay open at frame 25");
    assert_eq!(window.position, expected);
    assert_eq!(window.size, ScreenSize::new(200, 44));
    assert_eq!(window.flags, TOOLTIP_FLAGS);
    assert!(window.needs_redraw());
}

#[test]
fn test_motion_after_show_hides() {
    let mut ctx = resting_context();
    let mut windows = WindowManager::new();
    let mut input = InputState::at(CURSOR);
    assert!(run_frames(&mut ctx, &input, &mut windows, 25).is_visible());

    input.cursor = CURSOR + ScreenCoords::new(10, 0);
    let change = ctx.update_visibility(ThemeFlags::empty(), &input, &mut windows);

    assert_eq!(change, VisibilityChange::Hidden);
    assert_eq!(ctx.pointer.hold_duration(), 0);
    assert!(overlay(&windows).is_none());
}

#[test]
fn test_error_dialog_hides_shown_tooltip() {
    let mut ctx = resting_context();
    let mut windows = WindowManager::new();
    let input = InputState::at(CURSOR);
    run_frames(&mut ctx, &input, &mut windows, 30);
    assert!(overlay(&windows).is_some());

    windows.focus_or_create(
        WindowClass::Error,
        ScreenCoords::new(0, 0),
        ScreenSize::new(300, 100),
        WindowFlags::empty(),
    );
    let change = ctx.update_visibility(ThemeFlags::empty(), &input, &mut windows);

    assert_eq!(change, VisibilityChange::Hidden);
    assert!(overlay(&windows).is_none());
    assert_eq!(ctx.pointer.hold_duration(), 31, "dialog does not reset the hold");
    assert!(windows.find_by_class(WindowClass::Error).is_some());
}

#[test]
fn test_full_bottom_toolbar_only_invalidates_toolbar() {
    let mut ctx = resting_context();
    ctx.pointer = PointerSample::with_hold(CURSOR, 100);
    let mut registry = RecordingRegistry::new();
    registry.inner.focus_or_create(
        WindowClass::BottomToolbar,
        ScreenCoords::new(0, 400),
        ScreenSize::new(640, 48),
        WindowFlags::empty(),
    );
    registry.inner.mark_all_drawn();

    let input = InputState::at(CURSOR + ScreenCoords::new(50, 50));
    let change = ctx.update_visibility(ThemeFlags::USE_FULL_BOTTOM_TOOLBAR, &input, &mut registry);

    assert_eq!(change, VisibilityChange::Deferred);
    assert_snapshot!(registry.call_log(), @"invalidate BottomToolbar");
    assert!(registry.calls_for(WindowClass::MapTooltip).is_empty());
    assert!(registry.inner.any_needs_redraw());
    // Sampling is skipped entirely in this mode
    assert_eq!(ctx.pointer, PointerSample::with_hold(CURSOR, 100));
}

#[test]
fn test_full_bottom_toolbar_without_toolbar_window_is_noop() {
    let mut ctx = resting_context();
    let mut windows = WindowManager::new();
    let change = ctx.update_visibility(
        ThemeFlags::USE_FULL_BOTTOM_TOOLBAR,
        &InputState::at(CURSOR),
        &mut windows,
    );
    assert_eq!(change, VisibilityChange::Deferred);
    assert!(windows.is_empty());
}

#[test]
fn test_show_path_registry_calls() {
    let mut ctx = resting_context();
    ctx.pointer = PointerSample::with_hold(CURSOR, 24);
    let mut registry = RecordingRegistry::new();

    ctx.update_visibility(ThemeFlags::empty(), &InputState::at(CURSOR), &mut registry);

    assert_snapshot!(registry.call_log(), @r"
    find Error
    find MapTooltip
    focus_or_create MapTooltip
    ");
}

#[test]
fn test_hide_path_issues_single_close() {
    let mut ctx = resting_context();
    let mut registry = RecordingRegistry::new();

    ctx.update_visibility(ThemeFlags::empty(), &InputState::at(CURSOR), &mut registry);

    assert_snapshot!(registry.call_log(), @"close MapTooltip");
}

#[test]
fn test_hide_without_overlay_is_idempotent() {
    let mut ctx = TooltipContext::new();
    let mut windows = WindowManager::new();
    let input = InputState::at(ScreenCoords::new(0, 0));

    for _ in 0..3 {
        assert_eq!(
            ctx.update_visibility(ThemeFlags::empty(), &input, &mut windows),
            VisibilityChange::Hidden
        );
        assert!(windows.is_empty());
    }
}

#[test]
fn test_small_motion_moves_open_overlay() {
    let mut ctx = resting_context();
    let mut windows = WindowManager::new();
    let mut input = InputState::at(CURSOR);
    run_frames(&mut ctx, &input, &mut windows, 25);

    input.cursor = CURSOR + ScreenCoords::new(3, -2);
    let change = ctx.update_visibility(ThemeFlags::empty(), &input, &mut windows);
    let moved_to = tooltip_position(input.cursor);
    assert_eq!(change, VisibilityChange::Moved(moved_to));
    assert_eq!(overlay(&windows).map(|w| w.position), Some(moved_to));
    assert_eq!(windows.len(), 1);

    let change = ctx.update_visibility(ThemeFlags::empty(), &input, &mut windows);
    assert_eq!(change, VisibilityChange::Unchanged);
}

#[test]
fn test_open_overlay_is_reused_and_invalidated() {
    let mut ctx = resting_context();
    let mut windows = WindowManager::new();
    let input = InputState::at(CURSOR);
    run_frames(&mut ctx, &input, &mut windows, 25);
    windows.mark_all_drawn();

    ctx.update_visibility(ThemeFlags::empty(), &input, &mut windows);

    assert!(overlay(&windows).is_some_and(|w| w.needs_redraw()));
    assert_eq!(windows.len(), 1);
}

#[test]
fn test_overlay_closed_by_host_is_recreated() {
    let mut ctx = resting_context();
    let mut windows = WindowManager::new();
    let input = InputState::at(CURSOR);
    run_frames(&mut ctx, &input, &mut windows, 25);

    windows.close_all();
    let change = ctx.update_visibility(ThemeFlags::empty(), &input, &mut windows);

    assert_eq!(change, VisibilityChange::Shown(tooltip_position(CURSOR)));
}

#[test]
fn test_placement_modifier_suppresses_without_reset() {
    let mut ctx = resting_context();
    let mut windows = WindowManager::new();
    let mut input = InputState::at(CURSOR);
    run_frames(&mut ctx, &input, &mut windows, 25);

    input.modifiers = PlaceObjectModifier::COPY_Z | PlaceObjectModifier::SHIFT_Z;
    assert_eq!(
        ctx.update_visibility(ThemeFlags::empty(), &input, &mut windows),
        VisibilityChange::Hidden
    );
    assert_eq!(ctx.pointer.hold_duration(), 26);

    input.modifiers = PlaceObjectModifier::empty();
    assert!(ctx.update_visibility(ThemeFlags::empty(), &input, &mut windows).is_visible());
}

#[test]
fn test_drag_resets_hold() {
    let mut ctx = resting_context();
    let mut windows = WindowManager::new();
    let mut input = InputState::at(CURSOR);
    run_frames(&mut ctx, &input, &mut windows, 25);

    input.set_flag(InputFlags::DRAG_IN_PROGRESS, true);
    assert_eq!(
        ctx.update_visibility(ThemeFlags::empty(), &input, &mut windows),
        VisibilityChange::Hidden
    );
    assert_eq!(ctx.pointer.hold_duration(), 0);
}

#[test]
fn test_viewport_right_mode_resets_hold() {
    let mut ctx = resting_context();
    let mut windows = WindowManager::new();
    let mut input = InputState::at(CURSOR);
    input.mode = InteractionMode::ViewportRight;

    assert_eq!(run_frames(&mut ctx, &input, &mut windows, 40), VisibilityChange::Hidden);
    assert_eq!(ctx.pointer.hold_duration(), 0);

    // Left-drag mode alone does not reset
    input.mode = InteractionMode::ViewportLeft;
    run_frames(&mut ctx, &input, &mut windows, 3);
    assert_eq!(ctx.pointer.hold_duration(), 3);
}

#[test]
fn test_cleared_content_hides() {
    let mut ctx = resting_context();
    let mut windows = WindowManager::new();
    let input = InputState::at(CURSOR);
    run_frames(&mut ctx, &input, &mut windows, 25);

    ctx.store.clear_tooltip();
    assert_eq!(
        ctx.update_visibility(ThemeFlags::empty(), &input, &mut windows),
        VisibilityChange::Hidden
    );
    assert!(overlay(&windows).is_none());
}

#[test]
fn test_visibility_change_is_visible() {
    assert!(!VisibilityChange::Deferred.is_visible());
    assert!(!VisibilityChange::Hidden.is_visible());
    assert!(VisibilityChange::Shown(CURSOR).is_visible());
    assert!(VisibilityChange::Moved(CURSOR).is_visible());
    assert!(VisibilityChange::Unchanged.is_visible());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// No content means no overlay, however long the pointer has rested
    #[test]
    fn prop_sentinel_always_hides(hold in 0u32..100_000, x in -2000i32..2000, y in -2000i32..2000) {
        let cursor = ScreenCoords::new(x, y);
        let mut ctx = TooltipContext::new();
        ctx.store.set_tooltip(TooltipPayload::none());
        ctx.pointer = PointerSample::with_hold(cursor, hold);

        let mut windows = WindowManager::new();
        windows.focus_or_create(WindowClass::MapTooltip, cursor, TOOLTIP_SIZE, TOOLTIP_FLAGS);

        let change = ctx.update_visibility(ThemeFlags::empty(), &InputState::at(cursor), &mut windows);
        prop_assert_eq!(change, VisibilityChange::Hidden);
        prop_assert!(windows.find_by_class(WindowClass::MapTooltip).is_none());
    }

    /// Whatever sequence of frames runs, at most one overlay exists
    #[test]
    fn prop_at_most_one_overlay(steps in prop::collection::vec((-8i32..=8, -8i32..=8, any::<bool>()), 1..80)) {
        let mut ctx = resting_context();
        let mut windows = WindowManager::new();
        let mut input = InputState::at(CURSOR);

        for (dx, dy, clear) in steps {
            input.cursor = input.cursor + ScreenCoords::new(dx, dy);
            if clear {
                ctx.store.clear_tooltip();
            } else {
                ctx.store.set_tooltip(tile_payload());
            }
            let change = ctx.update_visibility(ThemeFlags::empty(), &input, &mut windows);
            let open = windows
                .windows()
                .filter(|w| w.class == WindowClass::MapTooltip)
                .count();
            prop_assert!(open <= 1);
            prop_assert_eq!(open == 1, change.is_visible());
        }
    }
}
