//! Centralized theme configuration for all UI components.
//!
//! Holds the theme flags the tooltip controller queries, plus every color the
//! terminal host renders with. Use `theme::module::CONSTANT` in render files
//! rather than hardcoding `Color::*` values.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

bitflags::bitflags! {
    /// Theme-level display switches
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ThemeFlags: u8 {
        /// Map tooltips are shown inside the bottom toolbar instead of an
        /// overlay near the pointer
        const USE_FULL_BOTTOM_TOOLBAR = 1 << 0;
    }
}

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    // Text colors - softer than pure white
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    // Background colors - deep space blue tints
    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);

    // Semantic colors
    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);

    // Accent colors
    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const GREEN: Color = Color::Rgb(107, 203, 119);
    pub const MAGENTA: Color = Color::Rgb(198, 120, 221);
    pub const ORANGE: Color = Color::Rgb(255, 184, 108);
}

/// Tile colors for the map view
pub mod map {
    use super::*;

    pub const GRASS: Color = palette::GREEN;
    pub const WATER: Color = Color::Rgb(0, 140, 220);
    pub const PATH: Color = Color::Rgb(200, 180, 140);
    pub const TREE: Color = Color::Rgb(40, 130, 60);
    pub const RIDE: Color = Color::Rgb(255, 107, 157);
    pub const BACKGROUND: Color = palette::BG_DARK;
}

/// Pointer tooltip overlay
pub mod tooltip {
    use super::*;

    pub const TEXT: Style = Style::new()
        .fg(Color::Rgb(236, 236, 244))
        .add_modifier(Modifier::BOLD);
    /// Only used when a tooltip window is opened without NO_BACKGROUND
    pub const BORDER: Color = palette::MAGENTA;
}

/// Bottom toolbar
pub mod toolbar {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const BACKGROUND: Color = palette::BG_SURFACE;
    pub const TEXT: Color = palette::TEXT;
    pub const HINT: Color = palette::TEXT_MUTED;
}

/// Modal error dialog
pub mod error_dialog {
    use super::*;

    pub const BORDER: Color = palette::ERROR;
    pub const TITLE: Style = Style::new()
        .fg(Color::Rgb(224, 108, 117))
        .add_modifier(Modifier::BOLD);
    pub const TEXT: Color = palette::TEXT;
    pub const BACKGROUND: Color = palette::BG_SURFACE;
}

/// Status line at the top of the screen
pub mod status {
    use super::*;

    pub const TEXT: Color = palette::TEXT_DIM;
    pub const WARNING: Color = palette::WARNING;
    pub const KEY: Color = palette::ORANGE;
}
