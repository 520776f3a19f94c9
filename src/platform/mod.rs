//! Platform layer
//!
//! - `input`: key/pointer collectors producing per-frame input snapshots
//! - `web`: DOM lookups, status text, animation-frame scheduling (wasm only)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{MazeKeys, PongPointer, maze_command};
