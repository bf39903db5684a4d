//! Match session
//!
//! Owns every mutable entity of one match - paddles, ball, rally ramp,
//! score, clock - and drives the fixed-step tick. Collaborators hold a
//! reference to the session: the input layer feeds it intents, the
//! renderer reads its snapshot accessors and drains its event queue.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

use super::ai;
use super::ball;
use super::clock::MatchClock;
use super::config::{MatchConfig, MatchMode};
use super::paddle::{MoveIntent, apply_intent};
use super::state::{
    Ball, MatchEvent, MatchOutcome, MatchScore, OutcomeReason, Paddle, RallyState, Side,
};

/// One authoritative match simulation.
///
/// Constructed with an immutable `MatchConfig` and a seed; `restart`
/// rebuilds the same match from scratch with the same seed, which makes
/// whole matches reproducible.
pub struct MatchSession {
    config: MatchConfig,
    seed: u64,
    rng: Pcg32,
    clock: MatchClock,
    left: Paddle,
    right: Paddle,
    ball: Ball,
    rally: RallyState,
    score: MatchScore,
    paused: bool,
    outcome: Option<MatchOutcome>,
    events: Vec<MatchEvent>,
}

impl MatchSession {
    /// Configure and start a new match
    pub fn new(config: MatchConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let right_speed = match config.mode {
            MatchMode::SinglePlayer(difficulty) => difficulty.base_speed(),
            MatchMode::TwoPlayer => PADDLE_SPEED,
        };
        let session = Self {
            config,
            seed,
            clock: MatchClock::new(config.duration),
            left: Paddle::spawn(Side::Left, PADDLE_SPEED),
            right: Paddle::spawn(Side::Right, right_speed),
            ball: Ball::serve(&mut rng),
            rally: RallyState::default(),
            score: MatchScore::default(),
            paused: false,
            outcome: None,
            events: Vec::new(),
            rng,
        };
        log::info!(
            "match started: {:?} / limit {:?} / seed {}",
            config.duration,
            config.score_limit,
            seed
        );
        session
    }

    /// Tear the match down and start over: paddles, ball, rally, clock and
    /// score all return to their initial state. This is the only way the
    /// score resets; pause/resume never touches it.
    pub fn restart(&mut self) {
        *self = Self::new(self.config, self.seed);
    }

    /// Advance the simulation one fixed step.
    ///
    /// `p2_intent` is ignored in single-player mode; the AI supplies the
    /// right paddle's intent internally. Once a terminal outcome exists,
    /// or while paused, ticks are no-ops.
    pub fn tick(&mut self, dt: f32, p1_intent: MoveIntent, p2_intent: MoveIntent) {
        if self.paused || self.outcome.is_some() {
            return;
        }

        self.clock.advance(dt);

        apply_intent(&mut self.left, Side::Left, p1_intent, dt);
        let p2_intent = match self.config.mode {
            MatchMode::SinglePlayer(_) => ai::decide(&self.ball, &self.right, dt),
            MatchMode::TwoPlayer => p2_intent,
        };
        apply_intent(&mut self.right, Side::Right, p2_intent, dt);

        ball::step(
            &mut self.ball,
            &self.left,
            &self.right,
            &mut self.rally,
            &mut self.score,
            &mut self.rng,
            &mut self.events,
            dt,
        );

        // Terminal checks, time before score limit
        if self.clock.expired() {
            self.finish(MatchOutcome {
                winner: self.score.leader(),
                reason: OutcomeReason::TimeExpired,
            });
        } else if let Some(limit) = self.config.score_limit.limit() {
            if self.score.left >= limit {
                self.finish(MatchOutcome {
                    winner: Some(Side::Left),
                    reason: OutcomeReason::ScoreLimit,
                });
            } else if self.score.right >= limit {
                self.finish(MatchOutcome {
                    winner: Some(Side::Right),
                    reason: OutcomeReason::ScoreLimit,
                });
            }
        }
    }

    fn finish(&mut self, outcome: MatchOutcome) {
        log::info!(
            "match over: {:?} ({} : {})",
            outcome,
            self.score.left,
            self.score.right
        );
        self.outcome = Some(outcome);
        self.events.push(MatchEvent::MatchOver { outcome });
    }

    /// Skip tick updates until `resume` is called
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    // --- read-only snapshot accessors for the renderer ---

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn score(&self) -> MatchScore {
        self.score
    }

    pub fn time_remaining(&self) -> f32 {
        self.clock.remaining()
    }

    /// Current rally speed multiplier, exposed for visual intensity
    pub fn rally_multiplier(&self) -> f32 {
        self.rally.multiplier
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    /// Hand the transient event queue to the renderer, emptying it
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::config::{Difficulty, MatchDuration, ScoreLimit};
    use glam::Vec2;

    fn single_player(duration: MatchDuration, limit: ScoreLimit) -> MatchSession {
        MatchSession::new(
            MatchConfig {
                duration,
                score_limit: limit,
                mode: MatchMode::SinglePlayer(Difficulty::Medium),
            },
            12345,
        )
    }

    fn two_player(duration: MatchDuration, limit: ScoreLimit) -> MatchSession {
        MatchSession::new(
            MatchConfig {
                duration,
                score_limit: limit,
                mode: MatchMode::TwoPlayer,
            },
            12345,
        )
    }

    #[test]
    fn time_expiry_with_equal_scores_is_a_draw() {
        let mut session = two_player(MatchDuration::Sixty, ScoreLimit::Unlimited);
        // Park the ball so no goals happen: zero velocity, mid court
        session.ball.vel = Vec2::ZERO;

        // 60 s of 16 ms ticks
        for _ in 0..3750 {
            session.tick(0.016, MoveIntent::default(), MoveIntent::default());
        }

        let outcome = session.outcome().expect("match should have ended");
        assert_eq!(outcome.reason, OutcomeReason::TimeExpired);
        assert_eq!(outcome.winner, None);
        assert_eq!(session.time_remaining(), 0.0);
    }

    #[test]
    fn score_limit_ends_the_match_early() {
        let mut session = two_player(MatchDuration::OneTwenty, ScoreLimit::Three);
        session.ball.vel = Vec2::ZERO;
        session.score = MatchScore { left: 3, right: 1 };

        session.tick(SIM_DT, MoveIntent::default(), MoveIntent::default());

        let outcome = session.outcome().expect("limit reached");
        assert_eq!(outcome.winner, Some(Side::Left));
        assert_eq!(outcome.reason, OutcomeReason::ScoreLimit);
        assert!(session.time_remaining() > 0.0);
    }

    #[test]
    fn unlimited_score_limit_never_triggers() {
        let mut session = two_player(MatchDuration::OneTwenty, ScoreLimit::Unlimited);
        session.ball.vel = Vec2::ZERO;
        session.score = MatchScore {
            left: 40,
            right: 12,
        };

        session.tick(SIM_DT, MoveIntent::default(), MoveIntent::default());
        assert!(session.outcome().is_none());
    }

    #[test]
    fn ticks_are_noops_after_the_outcome() {
        let mut session = two_player(MatchDuration::Sixty, ScoreLimit::Three);
        session.ball.vel = Vec2::ZERO;
        session.score = MatchScore { left: 3, right: 0 };
        session.tick(SIM_DT, MoveIntent::default(), MoveIntent::default());
        assert!(session.outcome().is_some());

        let score = session.score();
        let remaining = session.time_remaining();
        for _ in 0..100 {
            session.tick(SIM_DT, MoveIntent::new(1.0, 1.0), MoveIntent::new(1.0, 1.0));
        }
        assert_eq!(session.score(), score);
        assert_eq!(session.time_remaining(), remaining);
    }

    #[test]
    fn pause_skips_updates_without_touching_state() {
        let mut session = two_player(MatchDuration::Ninety, ScoreLimit::Five);
        let ball_before = session.ball().pos;
        let remaining = session.time_remaining();

        session.pause();
        for _ in 0..50 {
            session.tick(SIM_DT, MoveIntent::new(0.0, 1.0), MoveIntent::default());
        }
        assert_eq!(session.ball().pos, ball_before);
        assert_eq!(session.time_remaining(), remaining);

        session.resume();
        session.tick(SIM_DT, MoveIntent::default(), MoveIntent::default());
        assert!(session.time_remaining() < remaining);
    }

    #[test]
    fn restart_resets_score_and_clock() {
        let mut session = two_player(MatchDuration::Ninety, ScoreLimit::Five);
        session.score = MatchScore { left: 2, right: 4 };
        for _ in 0..100 {
            session.tick(SIM_DT, MoveIntent::default(), MoveIntent::default());
        }

        session.restart();
        assert_eq!(session.score(), MatchScore::default());
        assert_eq!(session.time_remaining(), MatchDuration::Ninety.secs());
        assert_eq!(session.rally_multiplier(), 1.0);
        assert!(session.outcome().is_none());
    }

    #[test]
    fn single_player_ignores_supplied_p2_intent() {
        let mut a = single_player(MatchDuration::Ninety, ScoreLimit::Five);
        let mut b = single_player(MatchDuration::Ninety, ScoreLimit::Five);

        for _ in 0..200 {
            a.tick(SIM_DT, MoveIntent::default(), MoveIntent::default());
            b.tick(SIM_DT, MoveIntent::default(), MoveIntent::new(-1.0, -1.0));
        }
        assert_eq!(a.paddle(Side::Right).pos, b.paddle(Side::Right).pos);
    }

    #[test]
    fn ai_paddle_carries_its_tier_speed() {
        let session = MatchSession::new(
            MatchConfig {
                duration: MatchDuration::Ninety,
                score_limit: ScoreLimit::Five,
                mode: MatchMode::SinglePlayer(Difficulty::Hard),
            },
            7,
        );
        assert_eq!(
            session.paddle(Side::Right).speed,
            Difficulty::Hard.base_speed()
        );
        assert_eq!(session.paddle(Side::Left).speed, PADDLE_SPEED);
    }

    #[test]
    fn same_seed_same_intents_is_deterministic() {
        let mut a = single_player(MatchDuration::Ninety, ScoreLimit::Unlimited);
        let mut b = single_player(MatchDuration::Ninety, ScoreLimit::Unlimited);

        let intents = [
            MoveIntent::new(0.0, 1.0),
            MoveIntent::new(-1.0, 0.5),
            MoveIntent::default(),
            MoveIntent::new(1.0, -1.0),
        ];
        for i in 0..2000 {
            let intent = intents[i % intents.len()];
            a.tick(SIM_DT, intent, MoveIntent::default());
            b.tick(SIM_DT, intent, MoveIntent::default());
        }

        assert_eq!(a.ball().pos, b.ball().pos);
        assert_eq!(a.ball().vel, b.ball().vel);
        assert_eq!(a.score(), b.score());
        assert_eq!(a.paddle(Side::Right).pos, b.paddle(Side::Right).pos);
    }

    #[test]
    fn goal_events_reach_the_renderer_once() {
        let mut session = two_player(MatchDuration::Ninety, ScoreLimit::Unlimited);
        // Aim the ball straight out the left edge, away from the paddle
        session.ball.pos = Vec2::new(5.0, 550.0);
        session.ball.vel = Vec2::new(-BALL_SPEED_X, 0.0);

        session.tick(SIM_DT, MoveIntent::default(), MoveIntent::default());

        let events = session.drain_events();
        assert!(
            events
                .iter()
                .any(|e| matches!(e, MatchEvent::GoalScored { scorer: Side::Right, .. }))
        );
        // Queue is emptied by the drain
        assert!(session.drain_events().is_empty());
    }
}
