use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use super::tile_map::{TILE_COLUMNS, TileMap};
use crate::theme;

/// Draw as much of the map as fits in `area`. Returns the area the map
/// actually covers.
pub fn render_map(buf: &mut Buffer, area: Rect, map: &TileMap) -> Rect {
    let columns = (map.width().saturating_mul(TILE_COLUMNS)).min(area.width);
    let rows = map.height().min(area.height);
    let covered = Rect::new(area.x, area.y, columns, rows);

    buf.set_style(area, Style::default().bg(theme::map::BACKGROUND));

    for y in 0..rows {
        for x in 0..columns / TILE_COLUMNS {
            let Some(tile) = map.get(x, y) else {
                continue;
            };
            buf.set_string(
                area.x + x * TILE_COLUMNS,
                area.y + y,
                tile.kind.glyph(),
                Style::default()
                    .fg(tile.kind.color())
                    .bg(theme::map::BACKGROUND),
            );
        }
    }

    covered
}
