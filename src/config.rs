//! Game tuning
//!
//! Defaults come from `consts`. A page may override any subset by putting
//! JSON in the canvas `data-config` attribute, e.g.
//! `{"pong": {"ai_speed": 4.0}}`.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ArcadeResult;

/// Maze tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Tile edge in pixels (rendering only)
    pub tile_size: f32,
    /// Index into the level list
    pub level: usize,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            level: 0,
        }
    }
}

/// Pong tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PongConfig {
    /// Play area size
    pub width: f32,
    pub height: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between each paddle and its side wall
    pub paddle_margin: f32,

    pub ball_size: f32,
    /// Ball speed, also the magnitude of every serve
    pub ball_speed: f32,

    /// AI paddle pixels per frame
    pub ai_speed: f32,
    pub ai_deadband: f32,
}

impl Default for PongConfig {
    fn default() -> Self {
        Self {
            width: PONG_WIDTH,
            height: PONG_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,
            ai_speed: AI_SPEED,
            ai_deadband: AI_DEADBAND,
        }
    }
}

impl PongConfig {
    /// Same tuning on a differently sized play area
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Tuning for both games
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    pub maze: MazeConfig,
    pub pong: PongConfig,
}

impl ArcadeConfig {
    /// Parse overrides; missing fields keep their defaults
    pub fn from_json(json: &str) -> ArcadeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse overrides if present, falling back to defaults on bad input
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json {
            Some(json) => match Self::from_json(json) {
                Ok(config) => {
                    log::info!("Loaded config overrides");
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring config overrides: {}", e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArcadeError;

    #[test]
    fn test_defaults_match_consts() {
        let config = ArcadeConfig::default();
        assert_eq!(config.maze.tile_size, 16.0);
        assert_eq!(config.maze.level, 0);
        assert_eq!(config.pong.paddle_height, 80.0);
        assert_eq!(config.pong.ball_speed, 5.0);
        assert_eq!(config.pong.ai_deadband, 10.0);
    }

    #[test]
    fn test_partial_override() {
        let config = ArcadeConfig::from_json(r#"{"pong": {"ai_speed": 4.5}}"#).unwrap();
        assert_eq!(config.pong.ai_speed, 4.5);
        assert_eq!(config.pong.paddle_width, PADDLE_WIDTH);
        assert_eq!(config.maze, MazeConfig::default());
    }

    #[test]
    fn test_invalid_json() {
        let err = ArcadeConfig::from_json("{pong").unwrap_err();
        assert!(matches!(err, ArcadeError::InvalidConfig(_)));

        let config = ArcadeConfig::from_json_or_default(Some("{pong"));
        assert_eq!(config, ArcadeConfig::default());
        assert_eq!(ArcadeConfig::from_json_or_default(None), ArcadeConfig::default());
    }

    #[test]
    fn test_with_size() {
        let config = PongConfig::default().with_size(640.0, 480.0);
        assert_eq!(config.width, 640.0);
        assert_eq!(config.height, 480.0);
        assert_eq!(config.ball_size, BALL_SIZE);
    }
}
