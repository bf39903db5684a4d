//! Ball physics
//!
//! The tricky part of the match core: advancing the ball one fixed step and
//! resolving wall bounces, paddle strikes and goals in a fixed order. The
//! paddle test is swept - it compares the leading edge against both the
//! previous and current positions - so a fast ball cannot tunnel through a
//! paddle within a single step.
//!
//! Resolution order is normative: walls, then the left paddle, then the
//! right paddle, then goals. When a step produces a same-tick double
//! overlap, the earlier check wins.

use rand::Rng;

use crate::consts::*;

use super::state::{Ball, MatchEvent, MatchScore, Paddle, RallyState, Side};

/// Advance the ball by one fixed step and resolve all collisions.
///
/// Goals are handled here in full: the score is awarded, the ball is
/// re-served from the injected RNG and the rally ramp resets. Transient
/// feedback lands in `events` for the renderer to drain.
pub fn step<R: Rng>(
    ball: &mut Ball,
    left: &Paddle,
    right: &Paddle,
    rally: &mut RallyState,
    score: &mut MatchScore,
    rng: &mut R,
    events: &mut Vec<MatchEvent>,
    dt: f32,
) {
    // Integrate, keeping the pre-step position for the swept test
    ball.prev_pos = ball.pos;
    ball.pos += ball.vel * rally.multiplier * dt;

    // Wall bounces: clamp to the boundary and invert vy exactly
    if ball.pos.y < ball.radius {
        ball.pos.y = ball.radius;
        ball.vel.y = -ball.vel.y;
        events.push(MatchEvent::WallBounce);
    } else if ball.pos.y > COURT_HEIGHT - ball.radius {
        ball.pos.y = COURT_HEIGHT - ball.radius;
        ball.vel.y = -ball.vel.y;
        events.push(MatchEvent::WallBounce);
    }

    // Paddle strikes, left before right
    for (paddle, side) in [(left, Side::Left), (right, Side::Right)] {
        if let Some(offset) = resolve_paddle(ball, paddle, side) {
            rally.record_hit();
            events.push(MatchEvent::PaddleHit { side, offset });
        }
    }

    // Goals: crossing the left edge scores for the right side and vice
    // versa. Shake scales with the multiplier at the moment of the goal,
    // so it is captured before the rally resets.
    let scorer = if ball.pos.x < 0.0 {
        Some(Side::Right)
    } else if ball.pos.x > COURT_WIDTH {
        Some(Side::Left)
    } else {
        None
    };

    if let Some(scorer) = scorer {
        score.award(scorer);
        let shake = GOAL_SHAKE_SCALE * rally.multiplier;
        let flash = match scorer {
            Side::Right => FLASH_LEFT_CONCEDES,
            Side::Left => FLASH_RIGHT_CONCEDES,
        };
        *ball = Ball::serve(rng);
        rally.reset();
        events.push(MatchEvent::GoalScored {
            scorer,
            flash,
            shake,
        });
    }
}

/// Test and resolve a strike against one paddle.
///
/// A hit requires vertical-extent overlap plus a leading-edge crossing:
/// either a swept crossing (the leading edge was outside the facing edge
/// last tick and is at or past it now) or a resting overlap inside the
/// paddle's horizontal span while the ball is moving toward the paddle.
/// The directional gate means a ball merely adjacent to a paddle while
/// moving away never re-triggers.
///
/// Returns the normalized strike offset on a hit.
fn resolve_paddle(ball: &mut Ball, paddle: &Paddle, side: Side) -> Option<f32> {
    let half_h = paddle.half_height();
    let overlap_y = ball.pos.y + ball.radius >= paddle.pos.y - half_h
        && ball.pos.y - ball.radius <= paddle.pos.y + half_h;
    if !overlap_y {
        return None;
    }

    let face = paddle.facing_edge(side);
    let back = paddle.back_edge(side);

    let hit = match side {
        Side::Left => {
            let lead = ball.pos.x - ball.radius;
            let prev_lead = ball.prev_pos.x - ball.radius;
            let swept = prev_lead >= face && lead <= face;
            let resting = lead <= face && lead >= back && ball.vel.x < 0.0;
            swept || resting
        }
        Side::Right => {
            let lead = ball.pos.x + ball.radius;
            let prev_lead = ball.prev_pos.x + ball.radius;
            let swept = prev_lead <= face && lead >= face;
            let resting = lead >= face && lead <= back && ball.vel.x > 0.0;
            swept || resting
        }
    };
    if !hit {
        return None;
    }

    // Seat the ball exactly on the facing edge and send it back out with
    // its horizontal magnitude preserved
    match side {
        Side::Left => {
            ball.pos.x = face + ball.radius;
            ball.vel.x = ball.vel.x.abs();
        }
        Side::Right => {
            ball.pos.x = face - ball.radius;
            ball.vel.x = -ball.vel.x.abs();
        }
    }

    // Vertical deflection proportional to where on the paddle we struck
    let offset = (ball.pos.y - paddle.pos.y) / half_h;
    ball.vel.y += offset * SPIN_DEFLECTION;

    Some(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use glam::Vec2;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    struct Court {
        ball: Ball,
        left: Paddle,
        right: Paddle,
        rally: RallyState,
        score: MatchScore,
        rng: Pcg32,
        events: Vec<MatchEvent>,
    }

    impl Court {
        fn new() -> Self {
            let mut rng = Pcg32::seed_from_u64(42);
            Self {
                ball: Ball::serve(&mut rng),
                left: Paddle::spawn(Side::Left, PADDLE_SPEED),
                right: Paddle::spawn(Side::Right, PADDLE_SPEED),
                rally: RallyState::default(),
                score: MatchScore::default(),
                rng,
                events: Vec::new(),
            }
        }

        fn step(&mut self) {
            step(
                &mut self.ball,
                &self.left,
                &self.right,
                &mut self.rally,
                &mut self.score,
                &mut self.rng,
                &mut self.events,
                SIM_DT,
            );
        }
    }

    #[test]
    fn wall_bounce_clamps_and_flips_vy() {
        let mut court = Court::new();
        court.ball.pos = Vec2::new(400.0, BALL_RADIUS + 1.0);
        court.ball.vel = Vec2::new(0.0, -BALL_SPEED_Y);

        court.step();

        assert_eq!(court.ball.pos.y, BALL_RADIUS);
        assert_eq!(court.ball.vel.y, BALL_SPEED_Y);
        assert!(court.events.contains(&MatchEvent::WallBounce));
    }

    #[test]
    fn top_wall_bounce_is_symmetric() {
        let mut court = Court::new();
        court.ball.pos = Vec2::new(400.0, COURT_HEIGHT - BALL_RADIUS - 1.0);
        court.ball.vel = Vec2::new(0.0, BALL_SPEED_Y);

        court.step();

        assert_eq!(court.ball.pos.y, COURT_HEIGHT - BALL_RADIUS);
        assert_eq!(court.ball.vel.y, -BALL_SPEED_Y);
    }

    #[test]
    fn slow_approach_hits_left_paddle() {
        let mut court = Court::new();
        let face = court.left.facing_edge(Side::Left);
        court.ball.pos = Vec2::new(face + BALL_RADIUS + 2.0, court.left.pos.y);
        court.ball.vel = Vec2::new(-BALL_SPEED_X, 0.0);

        court.step();

        assert_eq!(court.ball.pos.x, face + BALL_RADIUS);
        assert_eq!(court.ball.vel.x, BALL_SPEED_X);
        assert_eq!(court.rally.hits, 1);
    }

    #[test]
    fn fast_ball_cannot_tunnel_through_right_paddle() {
        let mut court = Court::new();
        // One step would carry the ball clear past the paddle and off the
        // court; the swept test must still register the strike.
        court.ball.pos = Vec2::new(650.0, court.right.pos.y);
        court.ball.vel = Vec2::new(24_000.0, 0.0);

        court.step();

        let face = court.right.facing_edge(Side::Right);
        assert_eq!(court.ball.pos.x, face - BALL_RADIUS);
        assert!(court.ball.vel.x < 0.0);
        assert_eq!(court.score, MatchScore::default());
        assert_eq!(court.rally.hits, 1);
    }

    #[test]
    fn ball_moving_away_from_adjacent_paddle_does_not_retrigger() {
        let mut court = Court::new();
        let face = court.left.facing_edge(Side::Left);
        // Leading edge already inside the paddle's span, but outbound
        court.ball.pos = Vec2::new(face + BALL_RADIUS - 4.0, court.left.pos.y);
        court.ball.prev_pos = court.ball.pos;
        court.ball.vel = Vec2::new(BALL_SPEED_X, 0.0);

        court.step();

        assert_eq!(court.rally.hits, 0);
        assert!(court.ball.vel.x > 0.0);
    }

    #[test]
    fn strike_offset_adds_spin() {
        let mut court = Court::new();
        let face = court.left.facing_edge(Side::Left);
        // Strike near the paddle's top edge
        let strike_y = court.left.pos.y + court.left.half_height() * 0.8;
        court.ball.pos = Vec2::new(face + BALL_RADIUS + 2.0, strike_y);
        court.ball.vel = Vec2::new(-BALL_SPEED_X, 0.0);

        court.step();

        let offset = (strike_y - court.left.pos.y) / court.left.half_height();
        assert!((court.ball.vel.y - offset * SPIN_DEFLECTION).abs() < 1e-3);
    }

    #[test]
    fn left_exit_scores_right_and_reserves() {
        let mut court = Court::new();
        court.rally.multiplier = 1.6;
        court.ball.pos = Vec2::new(1.0, 300.0);
        // Out of the left paddle's vertical reach is irrelevant here; aim
        // between the paddles vertically but outside overlap
        court.ball.pos.y = court.left.pos.y + court.left.half_height() + BALL_RADIUS + 50.0;
        court.ball.vel = Vec2::new(-BALL_SPEED_X, 0.0);

        court.step();

        assert_eq!(court.score.right, 1);
        assert_eq!(court.score.left, 0);
        assert_eq!(
            court.ball.pos,
            Vec2::new(COURT_WIDTH / 2.0, COURT_HEIGHT / 2.0)
        );
        assert_eq!(court.ball.vel.x.abs(), BALL_SPEED_X);
        assert_eq!(court.ball.vel.y.abs(), BALL_SPEED_Y);
        assert_eq!(court.rally.multiplier, 1.0);
        assert_eq!(court.rally.hits, 0);

        let goal = court
            .events
            .iter()
            .find_map(|e| match e {
                MatchEvent::GoalScored { scorer, flash, shake } => {
                    Some((*scorer, *flash, *shake))
                }
                _ => None,
            })
            .expect("goal event");
        assert_eq!(goal.0, Side::Right);
        assert_eq!(goal.1, FLASH_LEFT_CONCEDES);
        // Shake reflects the multiplier before the rally reset
        assert!((goal.2 - GOAL_SHAKE_SCALE * 1.6).abs() < 1e-4);
    }

    #[test]
    fn right_exit_scores_left() {
        let mut court = Court::new();
        court.ball.pos = Vec2::new(COURT_WIDTH - 1.0, 50.0);
        court.ball.vel = Vec2::new(BALL_SPEED_X, 0.0);

        court.step();

        assert_eq!(court.score.left, 1);
        let flash = court.events.iter().find_map(|e| match e {
            MatchEvent::GoalScored { flash, .. } => Some(*flash),
            _ => None,
        });
        assert_eq!(flash, Some(FLASH_RIGHT_CONCEDES));
    }

    proptest! {
        #[test]
        fn ball_respects_wall_invariant(
            seed in proptest::num::u64::ANY,
            vx in -800.0f32..800.0,
            vy in -800.0f32..800.0,
            steps in 1usize..500,
        ) {
            let mut court = Court::new();
            court.rng = Pcg32::seed_from_u64(seed);
            court.ball.vel = Vec2::new(vx, vy);
            for _ in 0..steps {
                court.step();
                prop_assert!(court.ball.pos.y >= BALL_RADIUS - 1e-3);
                prop_assert!(court.ball.pos.y <= COURT_HEIGHT - BALL_RADIUS + 1e-3);
                prop_assert!(court.rally.multiplier >= 1.0);
                prop_assert!(court.rally.multiplier <= RALLY_CAP);
            }
        }

        #[test]
        fn rally_multiplier_only_drops_on_goals(
            seed in proptest::num::u64::ANY,
            steps in 1usize..400,
        ) {
            let mut court = Court::new();
            court.rng = Pcg32::seed_from_u64(seed);
            let mut prev = court.rally.multiplier;
            for _ in 0..steps {
                court.events.clear();
                court.step();
                let scored = court
                    .events
                    .iter()
                    .any(|e| matches!(e, MatchEvent::GoalScored { .. }));
                if scored {
                    prop_assert_eq!(court.rally.multiplier, 1.0);
                } else {
                    prop_assert!(court.rally.multiplier >= prev);
                }
                prev = court.rally.multiplier;
            }
        }
    }
}
