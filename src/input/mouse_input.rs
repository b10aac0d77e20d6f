//! Terminal mouse events to input state
//!
//! Ctrl maps to copy-Z and Shift to shift-Z placement, as in the map editor.

use ratatui::crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::input_state::{InputFlags, InputState, InteractionMode, PlaceObjectModifier};
use crate::coords::CellScale;

/// Fold a mouse event into `input`
pub fn apply_mouse_event(input: &mut InputState, mouse: MouseEvent, scale: CellScale) {
    input.cursor = scale.cell_center_px(mouse.column, mouse.row);
    input.modifiers = placement_modifiers(mouse.modifiers);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            input.set_flag(InputFlags::LEFT_MOUSE_DOWN, true);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            input.set_flag(InputFlags::LEFT_MOUSE_DOWN, true);
            input.set_flag(InputFlags::DRAG_IN_PROGRESS, true);
            input.mode = InteractionMode::ViewportLeft;
        }
        MouseEventKind::Up(MouseButton::Left) => {
            input.set_flag(InputFlags::LEFT_MOUSE_DOWN, false);
            input.set_flag(InputFlags::DRAG_IN_PROGRESS, false);
            if input.mode == InteractionMode::ViewportLeft {
                input.mode = InteractionMode::Normal;
            }
        }
        MouseEventKind::Down(MouseButton::Right) | MouseEventKind::Drag(MouseButton::Right) => {
            input.set_flag(InputFlags::RIGHT_MOUSE_DOWN, true);
            input.mode = InteractionMode::ViewportRight;
        }
        MouseEventKind::Up(MouseButton::Right) => {
            input.set_flag(InputFlags::RIGHT_MOUSE_DOWN, false);
            if input.mode == InteractionMode::ViewportRight {
                input.mode = InteractionMode::Normal;
            }
        }
        _ => {}
    }
}

fn placement_modifiers(keys: KeyModifiers) -> PlaceObjectModifier {
    let mut modifiers = PlaceObjectModifier::empty();
    modifiers.set(PlaceObjectModifier::COPY_Z, keys.contains(KeyModifiers::CONTROL));
    modifiers.set(PlaceObjectModifier::SHIFT_Z, keys.contains(KeyModifiers::SHIFT));
    modifiers
}

#[cfg(test)]
#[path = "mouse_input_tests.rs"]
mod mouse_input_tests;
