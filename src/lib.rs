//! Canvas Arcade - two tiny canvas games
//!
//! Core modules:
//! - `maze`: Glich, a tile-grid stealth maze (player, patrolling enemy, glitch walls)
//! - `pong`: Pong against a reactive AI paddle
//! - `renderer`: Pure scene builders plus the Canvas 2D backend
//! - `platform`: Input snapshots and browser glue
//! - `config`: Tunable geometry and speeds with JSON overrides

pub mod config;
pub mod error;
pub mod maze;
pub mod platform;
pub mod pong;
pub mod renderer;

pub use config::{ArcadeConfig, MazeConfig, PongConfig};
pub use error::{ArcadeError, ArcadeResult};

/// Game configuration constants
pub mod consts {
    /// DOM id of the maze canvas
    pub const MAZE_CANVAS_ID: &str = "game";
    /// DOM id of the maze status line
    pub const MAZE_STATUS_ID: &str = "status";
    /// DOM id of the Pong canvas
    pub const PONG_CANVAS_ID: &str = "pong";
    /// Canvas attribute holding optional JSON config overrides
    pub const CONFIG_ATTRIBUTE: &str = "data-config";

    /// Maze grid dimensions (tiles)
    pub const MAP_W: usize = 20;
    pub const MAP_H: usize = 12;
    /// Maze tile edge in pixels
    pub const TILE_SIZE: f32 = 16.0;

    /// Pong canvas fallback size (native runs and tests)
    pub const PONG_WIDTH: f32 = 800.0;
    pub const PONG_HEIGHT: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Gap between a paddle and its side of the canvas
    pub const PADDLE_MARGIN: f32 = 16.0;

    /// Ball defaults (the ball is a square)
    pub const BALL_SIZE: f32 = 14.0;
    pub const BALL_SPEED: f32 = 5.0;
    /// Steepest paddle deflection / serve angle (45 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// AI paddle speed in pixels per frame
    pub const AI_SPEED: f32 = 3.0;
    /// AI holds still while this close to the ball's center
    pub const AI_DEADBAND: f32 = 10.0;
}
