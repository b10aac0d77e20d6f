//! Layout regions tracked per frame

use ratatui::layout::Rect;

/// Identifies a drawn surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Map,
    BottomToolbar,
    ErrorDialog,
    Tooltip,
}

/// Rendered areas of the surfaces, in terminal cells
///
/// Rebuilt during each render pass. A region is `None` when its surface was not
/// drawn.
#[derive(Default, Clone, Debug)]
pub struct LayoutRegions {
    pub map: Option<Rect>,
    pub bottom_toolbar: Option<Rect>,
    pub error_dialog: Option<Rect>,
    pub tooltip: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
