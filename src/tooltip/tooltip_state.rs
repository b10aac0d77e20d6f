use crate::coords::ScreenCoords;

use super::tooltip_content::TooltipStore;

/// Per-frame pointer movement (either axis) above which the pointer counts as
/// moving rather than jittering
pub const MOTION_THRESHOLD: u32 = 5;

/// Consecutive still frames required before a tooltip may appear
pub const HOLD_THRESHOLD: u32 = 25;

/// Last observed pointer position and how long it has been held still
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerSample {
    last_cursor: ScreenCoords,
    hold_duration: u32,
}

impl PointerSample {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample with a preset hold counter
    pub fn with_hold(last_cursor: ScreenCoords, hold_duration: u32) -> Self {
        Self {
            last_cursor,
            hold_duration,
        }
    }

    pub fn last_cursor(&self) -> ScreenCoords {
        self.last_cursor
    }

    pub fn hold_duration(&self) -> u32 {
        self.hold_duration
    }

    /// Record this frame's pointer position and return the new hold counter.
    ///
    /// `input_held` resets the counter regardless of motion; hosts set it
    /// while a drag or right-button interaction is in progress.
    pub fn sample(&mut self, cursor: ScreenCoords, input_held: bool) -> u32 {
        let change = cursor - self.last_cursor;

        self.hold_duration = self.hold_duration.saturating_add(1);
        if change.x.unsigned_abs() > MOTION_THRESHOLD
            || change.y.unsigned_abs() > MOTION_THRESHOLD
            || input_held
        {
            self.hold_duration = 0;
        }
        self.last_cursor = cursor;

        self.hold_duration
    }

    pub fn has_dwelled(&self) -> bool {
        self.hold_duration >= HOLD_THRESHOLD
    }
}

/// Tooltip state shared between producers and the visibility controller.
///
/// Created once by the host at startup and passed to every frame update.
#[derive(Debug, Clone, Default)]
pub struct TooltipContext {
    pub store: TooltipStore,
    pub pointer: PointerSample,
}

impl TooltipContext {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
#[path = "tooltip_state_tests.rs"]
mod tooltip_state_tests;
