//! Pong entities and state

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::collision::Aabb;
use crate::config::PongConfig;
use crate::consts::MAX_BOUNCE_ANGLE;

/// Which end of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Human paddle
    Left,
    /// AI paddle
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A paddle; `pos` is its top-left corner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub score: u32,
}

impl Paddle {
    /// Paddle vertically centered on a `config` table
    pub fn new(side: Side, config: &PongConfig) -> Self {
        let x = match side {
            Side::Left => config.paddle_margin,
            Side::Right => config.width - config.paddle_margin - config.paddle_width,
        };
        Self {
            pos: Vec2::new(x, config.height / 2.0 - config.paddle_height / 2.0),
            width: config.paddle_width,
            height: config.paddle_height,
            score: 0,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::new(self.width, self.height))
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }

    /// Keep the paddle inside [0, table_height - height]
    pub fn clamp_to(&mut self, table_height: f32) {
        self.pos.y = self.pos.y.clamp(0.0, (table_height - self.height).max(0.0));
    }

    /// Center the paddle on `y`, then clamp
    pub fn center_on(&mut self, y: f32, table_height: f32) {
        self.pos.y = y - self.height / 2.0;
        self.clamp_to(table_height);
    }
}

/// The ball, a square; `pos` is its top-left corner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ball {
    pub pos: Vec2,
    pub size: f32,
    /// Serve speed and deflection magnitude
    pub speed: f32,
    pub vel: Vec2,
}

impl Ball {
    /// Centered ball moving down-right at `speed` per axis
    pub fn new(config: &PongConfig) -> Self {
        Self {
            pos: Self::center_pos(config),
            size: config.ball_size,
            speed: config.ball_speed,
            vel: Vec2::splat(config.ball_speed),
        }
    }

    fn center_pos(config: &PongConfig) -> Vec2 {
        Vec2::new(
            config.width / 2.0 - config.ball_size / 2.0,
            config.height / 2.0 - config.ball_size / 2.0,
        )
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::splat(self.size))
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }
}

/// Complete Pong state
#[derive(Debug, Clone, Serialize)]
pub struct PongState {
    pub config: PongConfig,
    /// Seed the serve RNG was built from
    pub seed: u64,
    /// Frames simulated so far
    pub frame: u64,
    /// Human paddle (left)
    pub player: Paddle,
    /// AI paddle (right)
    pub ai: Paddle,
    pub ball: Ball,
    #[serde(skip)]
    rng: Pcg32,
}

impl PongState {
    /// Fresh table: paddles centered, ball centered moving (speed, speed)
    pub fn new(config: PongConfig, seed: u64) -> Self {
        Self {
            player: Paddle::new(Side::Left, &config),
            ai: Paddle::new(Side::Right, &config),
            ball: Ball::new(&config),
            config,
            seed,
            frame: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.player,
            Side::Right => &mut self.ai,
        }
    }

    /// Recenter the ball and launch it at a random angle within ±45°
    /// toward a random side
    pub fn reset_ball(&mut self) {
        let angle = self.rng.random_range(-MAX_BOUNCE_ANGLE..MAX_BOUNCE_ANGLE);
        let dir = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let speed = self.ball.speed;

        self.ball.pos = Ball::center_pos(&self.config);
        self.ball.vel = Vec2::new(dir * speed * angle.cos(), speed * angle.sin());
    }
}
