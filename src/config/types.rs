// Configuration type definitions

use serde::Deserialize;

use crate::coords::CellScale;
use crate::theme::ThemeFlags;

/// Display configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayConfig {
    /// Show map tooltips in the bottom toolbar instead of near the pointer
    #[serde(default)]
    pub full_bottom_toolbar: bool,
}

/// Virtual pixels per terminal cell
#[derive(Debug, Clone, Deserialize)]
pub struct ScreenConfig {
    #[serde(default = "default_cell_width")]
    pub cell_width_px: u16,
    #[serde(default = "default_cell_height")]
    pub cell_height_px: u16,
}

fn default_cell_width() -> u16 {
    8
}

fn default_cell_height() -> u16 {
    16
}

impl Default for ScreenConfig {
    fn default() -> Self {
        ScreenConfig {
            cell_width_px: default_cell_width(),
            cell_height_px: default_cell_height(),
        }
    }
}

/// Demo host configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    /// Frame interval in milliseconds
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
}

fn default_frame_ms() -> u64 {
    25
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            frame_ms: default_frame_ms(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub screen: ScreenConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

impl Config {
    pub fn theme_flags(&self) -> ThemeFlags {
        let mut flags = ThemeFlags::empty();
        flags.set(
            ThemeFlags::USE_FULL_BOTTOM_TOOLBAR,
            self.display.full_bottom_toolbar,
        );
        flags
    }

    /// Cell scale, with zero sizes clamped to one pixel
    pub fn cell_scale(&self) -> CellScale {
        CellScale::new(self.screen.cell_width_px, self.screen.cell_height_px)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
