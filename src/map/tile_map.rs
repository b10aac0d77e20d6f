use ratatui::style::Color;

use crate::strings::{STR_TILE_GRASS, STR_TILE_PATH, STR_TILE_RIDE, STR_TILE_TREE, STR_TILE_WATER};
use crate::theme;
use crate::tooltip::StringId;

/// Terminal columns per tile, so tiles look roughly square
pub const TILE_COLUMNS: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Grass,
    Water,
    Path,
    Tree,
    Ride,
}

impl TileKind {
    pub fn name_id(self) -> StringId {
        match self {
            TileKind::Grass => STR_TILE_GRASS,
            TileKind::Water => STR_TILE_WATER,
            TileKind::Path => STR_TILE_PATH,
            TileKind::Tree => STR_TILE_TREE,
            TileKind::Ride => STR_TILE_RIDE,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            TileKind::Grass => "''",
            TileKind::Water => "~~",
            TileKind::Path => "==",
            TileKind::Tree => "^^",
            TileKind::Ride => "[]",
        }
    }

    pub fn color(self) -> Color {
        match self {
            TileKind::Grass => theme::map::GRASS,
            TileKind::Water => theme::map::WATER,
            TileKind::Path => theme::map::PATH,
            TileKind::Tree => theme::map::TREE,
            TileKind::Ride => theme::map::RIDE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub kind: TileKind,
    pub height: u8,
}

/// Row-major grid of tiles
#[derive(Debug, Clone)]
pub struct TileMap {
    width: u16,
    height: u16,
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Deterministic park layout: a lake in the low corner, a cross of paths,
    /// scattered trees and a few ride entrances.
    pub fn generate(width: u16, height: u16) -> Self {
        let mut tiles = Vec::with_capacity(usize::from(width) * usize::from(height));
        for y in 0..height {
            for x in 0..width {
                tiles.push(Self::tile_at(x, y, width, height));
            }
        }
        Self {
            width,
            height,
            tiles,
        }
    }

    fn tile_at(x: u16, y: u16, width: u16, height: u16) -> Tile {
        let (x32, y32) = (u32::from(x), u32::from(y));
        let elevation = ((x32 * 3 + y32 * 5) % 7) as u8 + 1;

        let kind = if x32 + y32 < 6 {
            TileKind::Water
        } else if y == height / 2 || x == width / 3 {
            TileKind::Path
        } else if x32 % 11 == 5 && y32 % 5 == 2 {
            TileKind::Ride
        } else if (x32 * 31 + y32 * 17) % 7 == 0 {
            TileKind::Tree
        } else {
            TileKind::Grass
        };

        let height = if kind == TileKind::Water { 0 } else { elevation };
        Tile { kind, height }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Tile> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.tiles
            .get(usize::from(y) * usize::from(self.width) + usize::from(x))
            .copied()
    }
}
