//! Input collectors
//!
//! Event handlers write into these; the frame callback takes one snapshot
//! per frame and hands it to the simulation.

use crate::maze::{MazeCommand, MazeInput};
use crate::pong::PongInput;

/// Command bound to a key, if any
pub fn maze_command(key: &str) -> Option<MazeCommand> {
    match key {
        "g" | "G" => Some(MazeCommand::ToggleGlitch),
        "f" | "F" => Some(MazeCommand::ToggleFreeze),
        "r" | "R" => Some(MazeCommand::Reset),
        _ => None,
    }
}

/// Held arrow keys plus presses not yet seen by a frame
#[derive(Debug, Clone, Default)]
pub struct MazeKeys {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    pending: Vec<MazeCommand>,
}

impl MazeKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press; returns true if the key is bound
    pub fn key_down(&mut self, key: &str) -> bool {
        if let Some(held) = self.arrow(key) {
            *held = true;
            return true;
        }
        if let Some(command) = maze_command(key) {
            self.pending.push(command);
            return true;
        }
        false
    }

    pub fn key_up(&mut self, key: &str) {
        if let Some(held) = self.arrow(key) {
            *held = false;
        }
    }

    /// Held keys as of now, and every press since the last snapshot
    pub fn snapshot(&mut self) -> MazeInput {
        MazeInput {
            up: self.up,
            down: self.down,
            left: self.left,
            right: self.right,
            commands: std::mem::take(&mut self.pending),
        }
    }

    fn arrow(&mut self, key: &str) -> Option<&mut bool> {
        match key {
            "ArrowUp" => Some(&mut self.up),
            "ArrowDown" => Some(&mut self.down),
            "ArrowLeft" => Some(&mut self.left),
            "ArrowRight" => Some(&mut self.right),
            _ => None,
        }
    }
}

/// Latest pointer position over the Pong canvas
#[derive(Debug, Clone, Default)]
pub struct PongPointer {
    latest: Option<f32>,
}

impl PongPointer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a move from page coordinates and the canvas' bounding rect top
    pub fn moved(&mut self, client_y: f32, canvas_top: f32) {
        self.latest = Some(client_y - canvas_top);
    }

    /// Take the pointer position; later frames see None until it moves again
    pub fn snapshot(&mut self) -> PongInput {
        PongInput {
            pointer_y: self.latest.take(),
        }
    }
}
