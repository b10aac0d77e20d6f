//! maptip library - Dwell-triggered hover tooltips for tile map viewers
//!
//! The tooltip core lives in [`tooltip`]; [`app`] and the remaining modules
//! make up the terminal map viewer that drives it.

pub mod app;
pub mod config;
pub mod coords;
pub mod error;
pub mod input;
pub mod layout;
pub mod map;
pub mod strings;
pub mod theme;
pub mod tooltip;
pub mod widgets;
pub mod window;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use coords::{CellScale, ScreenCoords, ScreenSize};
pub use error::MaptipError;
pub use input::{InputSource, InputState, InteractionMode, PlaceObjectModifier};
pub use theme::ThemeFlags;
pub use tooltip::{TooltipContext, TooltipPayload, TooltipStore, VisibilityChange};
pub use window::{Window, WindowClass, WindowFlags, WindowManager, WindowRegistry};
