//! Tiles, the grid that holds them, and level templates

use crate::consts::{MAP_H, MAP_W};

/// A single map cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    #[default]
    Empty,
    /// Blocks everything, always
    Wall,
    /// The bug; picking it up seals the glitch path
    Collectible,
    /// Blocks the player unless glitch power is on; never blocks the enemy
    GlitchWall,
    /// Drawn but has no gameplay effect
    Goal,
}

impl Tile {
    /// Level template code (0-4)
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Tile::Empty),
            1 => Some(Tile::Wall),
            2 => Some(Tile::Collectible),
            3 => Some(Tile::GlitchWall),
            4 => Some(Tile::Goal),
            _ => None,
        }
    }

    /// Whether the player is stopped by this tile
    pub fn blocks_player(self, glitch_power: bool) -> bool {
        match self {
            Tile::Wall => true,
            Tile::GlitchWall => !glitch_power,
            Tile::Empty | Tile::Collectible | Tile::Goal => false,
        }
    }

    /// Whether the patrolling enemy turns around at this tile
    pub fn blocks_enemy(self) -> bool {
        self == Tile::Wall
    }
}

/// Grid coordinate; signed so out-of-bounds neighbours are representable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Fixed-size row-major tile grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    rows: [[Tile; MAP_W]; MAP_H],
}

impl TileGrid {
    pub const WIDTH: usize = MAP_W;
    pub const HEIGHT: usize = MAP_H;

    /// Build from template codes; unknown codes become walls
    pub fn from_codes(codes: &[[u8; MAP_W]; MAP_H]) -> Self {
        let mut rows = [[Tile::Empty; MAP_W]; MAP_H];
        for (row, code_row) in rows.iter_mut().zip(codes) {
            for (tile, &code) in row.iter_mut().zip(code_row) {
                *tile = Tile::from_code(code).unwrap_or(Tile::Wall);
            }
        }
        Self { rows }
    }

    pub fn in_bounds(pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < MAP_W && (pos.y as usize) < MAP_H
    }

    /// Tile at `pos`, or None when out of bounds
    pub fn get(&self, pos: GridPos) -> Option<Tile> {
        if Self::in_bounds(pos) {
            Some(self.rows[pos.y as usize][pos.x as usize])
        } else {
            None
        }
    }

    /// Overwrite a tile; out-of-bounds writes are ignored
    pub fn set(&mut self, pos: GridPos, tile: Tile) {
        if Self::in_bounds(pos) {
            self.rows[pos.y as usize][pos.x as usize] = tile;
        }
    }

    /// Replace every `from` tile with `to`, returning how many changed
    pub fn replace_all(&mut self, from: Tile, to: Tile) -> usize {
        let mut changed = 0;
        for tile in self.rows.iter_mut().flatten() {
            if *tile == from {
                *tile = to;
                changed += 1;
            }
        }
        changed
    }

    pub fn count(&self, kind: Tile) -> usize {
        self.rows.iter().flatten().filter(|&&t| t == kind).count()
    }

    /// Row-major iteration with coordinates
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, Tile)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &tile)| (GridPos::new(x as i32, y as i32), tile))
        })
    }
}

/// A level template with spawn points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    pub codes: [[u8; MAP_W]; MAP_H],
    pub player_start: GridPos,
    pub enemy_start: GridPos,
    /// Initial patrol direction on x (±1)
    pub enemy_dir: i32,
}

impl Level {
    pub fn grid(&self) -> TileGrid {
        TileGrid::from_codes(&self.codes)
    }
}

/// Built-in levels
pub const LEVELS: &[Level] = &[Level {
    codes: [
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 2, 1],
        [1, 0, 1, 1, 1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 0, 1],
        [1, 0, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1],
        [1, 0, 1, 0, 1, 1, 1, 0, 1, 0, 3, 3, 3, 3, 3, 0, 1, 1, 0, 1],
        [1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 3, 0, 0, 1, 0, 1],
        [1, 0, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 0, 0, 3, 1, 0, 1, 0, 1],
        [1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 3, 0, 0, 1, 0, 1],
        [1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 3, 1, 1, 1, 0, 1],
        [1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
        [1, 0, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    ],
    player_start: GridPos::new(1, 1),
    enemy_start: GridPos::new(15, 9),
    enemy_dir: -1,
}];
