//! Rendering
//!
//! Scene builders turn game state into a flat list of draw commands without
//! touching any graphics API. The Canvas 2D backend replays that list.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod maze;
pub mod pong;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use maze::maze_scene;
pub use pong::pong_scene;
pub use scene::{DrawCmd, Scene};
