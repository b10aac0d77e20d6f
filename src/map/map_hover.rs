//! Map hover producer
//!
//! Each frame, writes the tooltip for the tile under the pointer, or clears it
//! when the pointer is not over the map.

use ratatui::layout::Rect;

use super::tile_map::{TILE_COLUMNS, Tile, TileMap};
use crate::strings::STR_TILE_TOOLTIP;
use crate::tooltip::{FormatArg, TooltipPayload, TooltipStore};

/// Tile under a terminal cell, if the cell falls inside the drawn map
pub fn tile_under(map: &TileMap, map_area: Rect, column: u16, row: u16) -> Option<Tile> {
    if column < map_area.left()
        || column >= map_area.right()
        || row < map_area.top()
        || row >= map_area.bottom()
    {
        return None;
    }

    let x = (column - map_area.x) / TILE_COLUMNS;
    let y = row - map_area.y;
    map.get(x, y)
}

pub fn tile_tooltip(tile: Tile) -> TooltipPayload {
    TooltipPayload::new(STR_TILE_TOOLTIP)
        .with_arg(FormatArg::StringId(tile.kind.name_id()))
        .with_arg(FormatArg::Int(i64::from(tile.height)))
}

/// Update the store for the pointer at (`column`, `row`)
pub fn update_map_tooltip(
    store: &mut TooltipStore,
    map: &TileMap,
    map_area: Option<Rect>,
    column: u16,
    row: u16,
) {
    match map_area.and_then(|area| tile_under(map, area, column, row)) {
        Some(tile) => store.set_tooltip(tile_tooltip(tile)),
        None => store.clear_tooltip(),
    }
}

#[cfg(test)]
#[path = "map_hover_tests.rs"]
mod map_hover_tests;
