use crate::coords::{ScreenCoords, ScreenSize};

/// Kinds of window the registry can hold. At most one window of each class
/// exists at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowClass {
    /// Hover overlay near the pointer
    MapTooltip,
    /// Modal error dialog
    Error,
    /// Persistent toolbar along the bottom edge
    BottomToolbar,
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct WindowFlags: u16 {
        /// Kept above windows without this flag
        const STICK_TO_FRONT = 0x0001;
        /// Content drawn straight over whatever is beneath
        const TRANSPARENT = 0x0010;
        /// No border or background chrome
        const NO_BACKGROUND = 0x0020;
    }
}

/// A window instance owned by the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub class: WindowClass,
    pub position: ScreenCoords,
    pub size: ScreenSize,
    pub flags: WindowFlags,
    needs_redraw: bool,
}

impl Window {
    pub fn new(class: WindowClass, position: ScreenCoords, size: ScreenSize, flags: WindowFlags) -> Self {
        Self {
            class,
            position,
            size,
            flags,
            needs_redraw: true,
        }
    }

    /// Request a redraw on the next draw pass
    pub fn invalidate(&mut self) {
        self.needs_redraw = true;
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn mark_drawn(&mut self) {
        self.needs_redraw = false;
    }

    pub fn center(&self) -> ScreenCoords {
        self.position + ScreenCoords::new(self.size.width / 2, self.size.height / 2)
    }
}

/// Lookup and lifecycle of windows by class.
///
/// Every operation must accept a class with no open window: lookups return
/// `None`, and invalidate or close do nothing.
pub trait WindowRegistry {
    fn find_by_class(&self, class: WindowClass) -> Option<&Window>;

    /// Bring the existing window of `class` to the front, or create one with
    /// the given geometry. An existing window keeps its geometry.
    fn focus_or_create(
        &mut self,
        class: WindowClass,
        position: ScreenCoords,
        size: ScreenSize,
        flags: WindowFlags,
    ) -> &mut Window;

    fn invalidate_by_class(&mut self, class: WindowClass);

    fn close_by_class(&mut self, class: WindowClass);
}
