//! Per-frame Pong update

use super::collision::resolve_paddle_hit;
use super::state::{PongState, Side};

/// Input snapshot for a single frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PongInput {
    /// Latest pointer y relative to the canvas top, if it moved this frame
    pub pointer_y: Option<f32>,
}

/// Things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PongEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball was returned by this side's paddle
    PaddleHit(Side),
    /// This side won the point
    Scored(Side),
}

/// Advance the table by one frame
pub fn tick(state: &mut PongState, input: &PongInput) -> Vec<PongEvent> {
    let mut events = Vec::new();
    let height = state.config.height;
    let width = state.config.width;

    state.frame += 1;

    if let Some(y) = input.pointer_y {
        state.player.center_on(y, height);
    }

    // Move ball
    let ball = &mut state.ball;
    ball.pos += ball.vel;

    // Top & bottom
    if ball.pos.y <= 0.0 || ball.pos.y + ball.size >= height {
        ball.vel.y = -ball.vel.y;
        events.push(PongEvent::WallBounce);
    }

    // Paddles
    for side in [Side::Left, Side::Right] {
        let paddle = match side {
            Side::Left => &state.player,
            Side::Right => &state.ai,
        };
        if resolve_paddle_hit(&mut state.ball, paddle, side) {
            events.push(PongEvent::PaddleHit(side));
        }
    }

    // Left & right walls
    let exited = if state.ball.pos.x <= 0.0 {
        Some(Side::Left)
    } else if state.ball.pos.x + state.ball.size >= width {
        Some(Side::Right)
    } else {
        None
    };
    if let Some(side) = exited {
        let scorer = side.opponent();
        state.paddle_mut(scorer).score += 1;
        state.reset_ball();
        events.push(PongEvent::Scored(scorer));
        log::debug!(
            "{:?} scores: {} - {}",
            scorer,
            state.player.score,
            state.ai.score
        );
    }

    move_ai(state);

    events
}

/// Reactive tracker: chase the ball's center outside the deadband, then clamp
fn move_ai(state: &mut PongState) {
    let target = state.ball.center_y();
    let deadband = state.config.ai_deadband;
    let speed = state.config.ai_speed;
    let ai = &mut state.ai;

    let center = ai.center_y();
    if center < target - deadband {
        ai.pos.y += speed;
    } else if center > target + deadband {
        ai.pos.y -= speed;
    }
    ai.clamp_to(state.config.height);
}
