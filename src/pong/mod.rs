//! Pong simulation
//!
//! Pure and deterministic for a given seed:
//! - One update per frame, velocities in pixels per frame
//! - Seeded RNG only (serve angles)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, bounce_velocity_y, impact_offset, resolve_paddle_hit};
pub use state::{Ball, Paddle, PongState, Side};
pub use tick::{PongEvent, PongInput, tick};
