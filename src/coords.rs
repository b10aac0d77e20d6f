//! Screen geometry in virtual pixels
//!
//! The tooltip core works in pixel space. Terminal hosts convert cells to and
//! from pixels with [`CellScale`].

use std::ops::{Add, Sub};

use ratatui::layout::Rect;

/// A point on screen, in virtual pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ScreenCoords {
    pub x: i32,
    pub y: i32,
}

impl ScreenCoords {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

// Saturating so that deltas between extreme samples never overflow
impl Sub for ScreenCoords {
    type Output = ScreenCoords;

    fn sub(self, rhs: ScreenCoords) -> ScreenCoords {
        ScreenCoords::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl Add for ScreenCoords {
    type Output = ScreenCoords;

    fn add(self, rhs: ScreenCoords) -> ScreenCoords {
        ScreenCoords::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

/// Width and height of a window, in virtual pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenSize {
    pub width: i32,
    pub height: i32,
}

impl ScreenSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Virtual pixels covered by one terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellScale {
    pub cell_width: u16,
    pub cell_height: u16,
}

impl Default for CellScale {
    fn default() -> Self {
        Self::new(8, 16)
    }
}

impl CellScale {
    /// Zero-sized cells are clamped to one pixel
    pub fn new(cell_width: u16, cell_height: u16) -> Self {
        Self {
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
        }
    }

    /// Top-left pixel of a terminal cell
    pub fn cell_to_px(&self, column: u16, row: u16) -> ScreenCoords {
        ScreenCoords::new(
            i32::from(column) * i32::from(self.cell_width),
            i32::from(row) * i32::from(self.cell_height),
        )
    }

    /// Centre pixel of a terminal cell, used as the pointer position
    pub fn cell_center_px(&self, column: u16, row: u16) -> ScreenCoords {
        let top_left = self.cell_to_px(column, row);
        ScreenCoords::new(
            top_left.x + i32::from(self.cell_width) / 2,
            top_left.y + i32::from(self.cell_height) / 2,
        )
    }

    /// Cell containing a pixel, clamped to the non-negative quadrant
    pub fn px_to_cell(&self, point: ScreenCoords) -> (u16, u16) {
        let column = point.x.max(0) / i32::from(self.cell_width);
        let row = point.y.max(0) / i32::from(self.cell_height);
        (
            column.min(i32::from(u16::MAX)) as u16,
            row.min(i32::from(u16::MAX)) as u16,
        )
    }

    /// Cells needed to cover a pixel span (rounded up)
    pub fn span_to_cells(&self, width: i32, height: i32) -> (u16, u16) {
        let cw = i32::from(self.cell_width);
        let ch = i32::from(self.cell_height);
        let columns = (width.max(0) + cw - 1) / cw;
        let rows = (height.max(0) + ch - 1) / ch;
        (
            columns.min(i32::from(u16::MAX)) as u16,
            rows.min(i32::from(u16::MAX)) as u16,
        )
    }

    /// Cell rectangle covering a pixel rectangle, clipped to `bounds`
    pub fn px_rect_to_cells(&self, position: ScreenCoords, size: ScreenSize, bounds: Rect) -> Rect {
        let (x, y) = self.px_to_cell(position);
        let (width, height) = self.span_to_cells(size.width, size.height);
        Rect {
            x,
            y,
            width,
            height,
        }
        .intersection(bounds)
    }
}

#[cfg(test)]
#[path = "coords_tests.rs"]
mod coords_tests;
