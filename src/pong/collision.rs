//! Ball/paddle collision detection and response

use glam::Vec2;

use super::state::{Ball, Paddle, Side};
use crate::consts::MAX_BOUNCE_ANGLE;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box from its top-left corner and size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap: boxes that only share an edge do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Where the ball struck the paddle, from -1 (top edge) to 1 (bottom edge)
pub fn impact_offset(ball: &Ball, paddle: &Paddle) -> f32 {
    let half = paddle.height / 2.0;
    if half <= 0.0 {
        return 0.0;
    }
    ((ball.center_y() - paddle.center_y()) / half).clamp(-1.0, 1.0)
}

/// Vertical velocity after a hit at `offset`; steepest at ±45°
pub fn bounce_velocity_y(offset: f32, speed: f32) -> f32 {
    speed * (offset * MAX_BOUNCE_ANGLE).sin()
}

/// If the ball overlaps `paddle`, push it flush against the paddle face,
/// send it back the other way and angle it by impact point.
///
/// Returns true on a hit.
pub fn resolve_paddle_hit(ball: &mut Ball, paddle: &Paddle, side: Side) -> bool {
    if !ball.aabb().overlaps(&paddle.aabb()) {
        return false;
    }

    ball.pos.x = match side {
        Side::Left => paddle.pos.x + paddle.width,
        Side::Right => paddle.pos.x - ball.size,
    };
    ball.vel.x = -ball.vel.x;
    ball.vel.y = bounce_velocity_y(impact_offset(ball, paddle), ball.speed);
    true
}
