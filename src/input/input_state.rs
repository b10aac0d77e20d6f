use crate::coords::ScreenCoords;

/// What the pointer is currently doing with the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Normal,
    /// Left button dragging the viewport
    ViewportLeft,
    /// Right button held over the viewport
    ViewportRight,
}

bitflags::bitflags! {
    /// Modifiers that alter object placement
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PlaceObjectModifier: u8 {
        const SHIFT_Z = 1 << 0;
        const COPY_Z = 1 << 1;
    }
}

bitflags::bitflags! {
    /// Pointer button state tracked by the host
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct InputFlags: u32 {
        const LEFT_MOUSE_DOWN = 1 << 0;
        const RIGHT_MOUSE_DOWN = 1 << 1;
        const DRAG_IN_PROGRESS = 1 << 4;
    }
}

/// Input queries the tooltip controller depends on
pub trait InputSource {
    fn cursor_position(&self) -> ScreenCoords;

    fn is_drag_in_progress(&self) -> bool;

    fn interaction_mode(&self) -> InteractionMode;

    /// True when any of the bits in `modifier` is held
    fn test_place_object_modifier(&self, modifier: PlaceObjectModifier) -> bool;

    /// Copy-Z or shift-Z placement is in progress
    fn is_placing_object(&self) -> bool {
        self.test_place_object_modifier(PlaceObjectModifier::COPY_Z | PlaceObjectModifier::SHIFT_Z)
    }
}

/// Host-side input snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    pub cursor: ScreenCoords,
    pub flags: InputFlags,
    pub mode: InteractionMode,
    pub modifiers: PlaceObjectModifier,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with the pointer at `cursor` and nothing pressed
    pub fn at(cursor: ScreenCoords) -> Self {
        Self {
            cursor,
            ..Self::default()
        }
    }

    pub fn set_flag(&mut self, flag: InputFlags, on: bool) {
        self.flags.set(flag, on);
    }
}

impl InputSource for InputState {
    fn cursor_position(&self) -> ScreenCoords {
        self.cursor
    }

    fn is_drag_in_progress(&self) -> bool {
        self.flags.contains(InputFlags::DRAG_IN_PROGRESS)
    }

    fn interaction_mode(&self) -> InteractionMode {
        self.mode
    }

    fn test_place_object_modifier(&self, modifier: PlaceObjectModifier) -> bool {
        self.modifiers.intersects(modifier)
    }
}
