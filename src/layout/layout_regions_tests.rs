//! Tests for LayoutRegions

use ratatui::layout::Rect;

use super::layout_regions::LayoutRegions;

#[test]
fn test_new_creates_empty_regions() {
    let regions = LayoutRegions::new();

    assert!(regions.map.is_none());
    assert!(regions.bottom_toolbar.is_none());
    assert!(regions.error_dialog.is_none());
    assert!(regions.tooltip.is_none());
}

#[test]
fn test_clear_resets_all_regions() {
    let mut regions = LayoutRegions::new();
    regions.map = Some(Rect::new(0, 0, 60, 12));
    regions.tooltip = Some(Rect::new(4, 4, 25, 3));

    regions.clear();

    assert!(regions.map.is_none());
    assert!(regions.tooltip.is_none());
}
