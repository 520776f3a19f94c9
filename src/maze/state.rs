//! Maze world state

use super::tile::{GridPos, LEVELS, Level, Tile, TileGrid};
use crate::error::{ArcadeError, ArcadeResult};

/// Status line shown under the maze
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    CollectBug,
    GlitchOn,
    GlitchOff,
    EnemyFrozen,
    EnemyUnfrozen,
    BugFixed,
    Caught,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::CollectBug => "Collect the bug (yellow)!",
            Status::GlitchOn => "Glitch Power: ON (walk through walls)",
            Status::GlitchOff => "Glitch Power: OFF",
            Status::EnemyFrozen => "Enemy frozen!",
            Status::EnemyUnfrozen => "Enemy unfrozen!",
            Status::BugFixed => "Bug fixed! Glitch path closed.",
            Status::Caught => "You were caught by a corrupted enemy! Press R to retry.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: GridPos,
    pub alive: bool,
}

impl Player {
    pub const COLOR: &'static str = "#3ff";
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub pos: GridPos,
    /// Patrol direction on x (±1)
    pub dir: i32,
    pub frozen: bool,
}

impl Enemy {
    pub const COLOR: &'static str = "#e24";
}

/// Mode toggles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeFlags {
    /// Glitch walls become passable for the player
    pub glitch_power: bool,
    /// Enemy patrol is halted
    pub freeze_enemy: bool,
    /// Latched once the bug is collected
    pub bug_fixed: bool,
}

/// Complete maze state
#[derive(Debug, Clone, PartialEq)]
pub struct MazeState {
    level_index: usize,
    level: &'static Level,
    pub grid: TileGrid,
    pub player: Player,
    pub enemy: Enemy,
    pub flags: ModeFlags,
    pub status: Status,
}

impl Default for MazeState {
    fn default() -> Self {
        Self::from_level(0, &LEVELS[0])
    }
}

impl MazeState {
    /// Fresh state on the first level
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state on level `index`
    pub fn with_level(index: usize) -> ArcadeResult<Self> {
        let level = LEVELS.get(index).ok_or(ArcadeError::UnknownLevel {
            index,
            available: LEVELS.len(),
        })?;
        Ok(Self::from_level(index, level))
    }

    fn from_level(level_index: usize, level: &'static Level) -> Self {
        Self {
            level_index,
            level,
            grid: level.grid(),
            player: Player {
                pos: level.player_start,
                alive: true,
            },
            enemy: Enemy {
                pos: level.enemy_start,
                dir: level.enemy_dir,
                frozen: false,
            },
            flags: ModeFlags::default(),
            status: Status::CollectBug,
        }
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    /// Restore the level template, spawns and flags
    pub fn reset(&mut self) {
        *self = Self::from_level(self.level_index, self.level);
        log::debug!("Maze level {} reset", self.level_index);
    }

    /// Whether the player may not enter (x, y) under the current mode.
    /// Out of bounds is always a wall.
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        match self.grid.get(GridPos::new(x, y)) {
            Some(tile) => tile.blocks_player(self.flags.glitch_power),
            None => true,
        }
    }

    pub fn toggle_glitch(&mut self) {
        self.flags.glitch_power = !self.flags.glitch_power;
        self.status = if self.flags.glitch_power {
            Status::GlitchOn
        } else {
            Status::GlitchOff
        };
    }

    pub fn toggle_freeze(&mut self) {
        self.flags.freeze_enemy = !self.flags.freeze_enemy;
        self.enemy.frozen = self.flags.freeze_enemy;
        self.status = if self.flags.freeze_enemy {
            Status::EnemyFrozen
        } else {
            Status::EnemyUnfrozen
        };
    }

    /// Pick up the bug if the player stands on it: seals every glitch wall
    pub fn collect_bug(&mut self) -> bool {
        if self.flags.bug_fixed || self.grid.get(self.player.pos) != Some(Tile::Collectible) {
            return false;
        }
        self.grid.set(self.player.pos, Tile::Empty);
        self.flags.bug_fixed = true;
        let sealed = self.grid.replace_all(Tile::GlitchWall, Tile::Wall);
        self.status = Status::BugFixed;
        log::debug!("Bug fixed, {} glitch walls sealed", sealed);
        true
    }
}
