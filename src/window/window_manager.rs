use crate::coords::{ScreenCoords, ScreenSize};

use super::window_registry::{Window, WindowClass, WindowFlags, WindowRegistry};

/// In-memory window stack, back to front
#[derive(Debug, Clone, Default)]
pub struct WindowManager {
    windows: Vec<Window>,
}

impl WindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Windows in draw order (bottom first)
    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn find_by_class_mut(&mut self, class: WindowClass) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.class == class)
    }

    /// Close every window, whatever its class
    pub fn close_all(&mut self) {
        #[cfg(debug_assertions)]
        log::debug!("Closing all {} windows", self.windows.len());

        self.windows.clear();
    }

    pub fn any_needs_redraw(&self) -> bool {
        self.windows.iter().any(Window::needs_redraw)
    }

    pub fn mark_all_drawn(&mut self) {
        for window in &mut self.windows {
            window.mark_drawn();
        }
    }

    fn index_of(&self, class: WindowClass) -> Option<usize> {
        self.windows.iter().position(|w| w.class == class)
    }

    /// Slot a window with `flags` takes when raised: above everything when it
    /// sticks to the front, otherwise just below the first sticky window.
    fn front_slot(&self, flags: WindowFlags) -> usize {
        if flags.contains(WindowFlags::STICK_TO_FRONT) {
            return self.windows.len();
        }
        self.windows
            .iter()
            .position(|w| w.flags.contains(WindowFlags::STICK_TO_FRONT))
            .unwrap_or(self.windows.len())
    }
}

impl WindowRegistry for WindowManager {
    fn find_by_class(&self, class: WindowClass) -> Option<&Window> {
        self.windows.iter().find(|w| w.class == class)
    }

    fn focus_or_create(
        &mut self,
        class: WindowClass,
        position: ScreenCoords,
        size: ScreenSize,
        flags: WindowFlags,
    ) -> &mut Window {
        let window = match self.index_of(class) {
            Some(index) => self.windows.remove(index),
            None => {
                #[cfg(debug_assertions)]
                log::debug!("Creating {:?} window at {:?}", class, position);

                Window::new(class, position, size, flags)
            }
        };

        let slot = self.front_slot(window.flags);
        self.windows.insert(slot, window);
        &mut self.windows[slot]
    }

    fn invalidate_by_class(&mut self, class: WindowClass) {
        if let Some(window) = self.find_by_class_mut(class) {
            window.invalidate();
        }
    }

    fn close_by_class(&mut self, class: WindowClass) {
        self.windows.retain(|w| w.class != class);
    }
}

#[cfg(test)]
#[path = "window_manager_tests.rs"]
mod window_manager_tests;
