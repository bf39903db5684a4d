//! Single-player opponent
//!
//! A reactive controller: it tracks the ball's current position with
//! speed-limited steps and produces a `MoveIntent` that goes through the
//! same paddle-movement path as human input. No lookahead, no bounce
//! prediction - skill expresses purely as tracking rate.

use crate::consts::*;

use super::paddle::{MoveIntent, lateral_bounds};
use super::state::{Ball, Paddle, Side};

/// Decide the AI paddle's movement intent for one tick.
///
/// The AI paddle's `speed` carries its difficulty tier, so an intent axis
/// of 1.0 is a full-rate step. When the remaining gap is smaller than a
/// full step the intent is scaled down to land exactly on the target; a
/// gap exactly equal to the step counts as arrival.
pub fn decide(ball: &Ball, paddle: &Paddle, dt: f32) -> MoveIntent {
    let step = paddle.speed * dt;
    if step <= 0.0 {
        return MoveIntent::default();
    }

    // Vertical: bounded-rate pursuit of the ball's y
    let dy = ball.pos.y - paddle.pos.y;
    let iy = (dy / step).clamp(-1.0, 1.0);

    // Lateral: only engage while the ball is on our half; otherwise fall
    // back to the default guard column. Lateral rate is deliberately
    // slower than vertical so quick cross-court shots stay winnable.
    let (min_x, max_x) = lateral_bounds(Side::Right);
    let target_x = if ball.pos.x > COURT_WIDTH / 2.0 {
        ball.pos.x.clamp(min_x, max_x)
    } else {
        AI_GUARD_X
    };
    let dx = target_x - paddle.pos.x;
    let ix = (dx / step).clamp(-AI_LATERAL_FACTOR, AI_LATERAL_FACTOR);

    MoveIntent::new(ix, iy)
}
