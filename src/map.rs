//! Tile map shown by the viewer
//!
//! Hovering a tile is what produces tooltip content.

pub mod map_hover;
pub mod map_render;
mod tile_map;

pub use tile_map::{TILE_COLUMNS, Tile, TileKind, TileMap};
