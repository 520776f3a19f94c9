//! Glich: tile-grid stealth maze
//!
//! Pure simulation, no rendering or platform dependencies:
//! - One grid step per held direction per frame
//! - Glitch mode lets the player through glitch walls
//! - Picking up the bug seals every glitch wall for good
//! - A single enemy patrols left and right

pub mod state;
pub mod tick;
pub mod tile;

pub use state::{Enemy, MazeState, ModeFlags, Player, Status};
pub use tick::{MazeCommand, MazeInput, tick};
pub use tile::{GridPos, LEVELS, Level, Tile, TileGrid};
