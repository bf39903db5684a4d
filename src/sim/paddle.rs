//! Paddle movement
//!
//! Turns per-frame movement intents (human input or AI decisions) into
//! clamped paddle positions. Paddles may roam laterally but never cross
//! the centerline or leave the court: each side defends half the court.

use crate::consts::*;

use super::state::{Paddle, Side};

/// One frame of movement intent for a paddle.
///
/// Each axis is a signal in [-1, 1]; values outside that range are clamped
/// before use, so simultaneous opposite key presses cancel instead of
/// double-applying.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveIntent {
    pub x: f32,
    pub y: f32,
}

impl MoveIntent {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(-1.0, 1.0),
            y: self.y.clamp(-1.0, 1.0),
        }
    }
}

/// The lateral band a paddle is allowed to occupy
#[inline]
pub fn lateral_bounds(side: Side) -> (f32, f32) {
    match side {
        Side::Left => (EDGE_MARGIN, COURT_WIDTH / 2.0 - CENTER_MARGIN),
        Side::Right => (COURT_WIDTH / 2.0 + CENTER_MARGIN, COURT_WIDTH - EDGE_MARGIN),
    }
}

/// Apply a movement intent and clamp the paddle into its legal rectangle.
///
/// Always succeeds; clamping is the only bounds enforcement in the game,
/// so it runs every tick even for a zero intent.
pub fn apply_intent(paddle: &mut Paddle, side: Side, intent: MoveIntent, dt: f32) {
    let intent = intent.clamped();
    paddle.pos.x += intent.x * paddle.speed * dt;
    paddle.pos.y += intent.y * paddle.speed * dt;

    let (min_x, max_x) = lateral_bounds(side);
    paddle.pos.x = paddle.pos.x.clamp(min_x, max_x);

    let half_h = paddle.half_height();
    paddle.pos.y = paddle.pos.y.clamp(half_h, COURT_HEIGHT - half_h);
}
