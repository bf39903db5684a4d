//! Match state and core simulation types
//!
//! Everything the renderer snapshots lives here. All fields are plain data;
//! mutation happens only inside the fixed-step tick.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

/// Court side, used to tag paddles, goals and outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The side that concedes when this side scores
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A player paddle
///
/// `pos` is the center of the paddle rectangle. `speed` is the full-rate
/// movement speed in pixels/s; the AI paddle gets its tier speed here so
/// intents mean the same thing for humans and the AI.
#[derive(Debug, Clone)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Paddle {
    /// Spawn a paddle at its side's default guard position
    pub fn spawn(side: Side, speed: f32) -> Self {
        let x = match side {
            Side::Left => PADDLE_SPAWN_INSET,
            Side::Right => COURT_WIDTH - PADDLE_SPAWN_INSET,
        };
        Self {
            pos: Vec2::new(x, COURT_HEIGHT / 2.0),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed,
        }
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }

    /// X coordinate of the face the ball strikes (the edge toward the net)
    #[inline]
    pub fn facing_edge(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.pos.x + self.width / 2.0,
            Side::Right => self.pos.x - self.width / 2.0,
        }
    }

    /// X coordinate of the edge away from the net
    #[inline]
    pub fn back_edge(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.pos.x - self.width / 2.0,
            Side::Right => self.pos.x + self.width / 2.0,
        }
    }
}

/// The match ball
///
/// `prev_pos` is the position at the start of the current tick; the swept
/// paddle-collision test needs it to catch crossings that happen entirely
/// within one step.
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub prev_pos: Vec2,
    pub radius: f32,
    pub vel: Vec2,
}

impl Ball {
    /// Place the ball at court center with a randomized diagonal direction.
    ///
    /// Horizontal and vertical signs are drawn independently; magnitudes are
    /// always the configured base speeds.
    pub fn serve<R: Rng>(rng: &mut R) -> Self {
        let center = Vec2::new(COURT_WIDTH / 2.0, COURT_HEIGHT / 2.0);
        let vx = if rng.random::<bool>() {
            BALL_SPEED_X
        } else {
            -BALL_SPEED_X
        };
        let vy = if rng.random::<bool>() {
            BALL_SPEED_Y
        } else {
            -BALL_SPEED_Y
        };
        Self {
            pos: center,
            prev_pos: center,
            radius: BALL_RADIUS,
            vel: Vec2::new(vx, vy),
        }
    }
}

/// Rally speed ramp
///
/// Invariant: `multiplier` stays in [1.0, RALLY_CAP] and never decreases
/// between serves.
#[derive(Debug, Clone)]
pub struct RallyState {
    pub multiplier: f32,
    pub hits: u32,
}

impl Default for RallyState {
    fn default() -> Self {
        Self {
            multiplier: 1.0,
            hits: 0,
        }
    }
}

impl RallyState {
    /// Register a paddle hit: bump the hit counter and the speed multiplier
    pub fn record_hit(&mut self) {
        self.hits += 1;
        if self.multiplier < RALLY_CAP {
            self.multiplier = (self.multiplier + RALLY_STEP).min(RALLY_CAP);
        }
    }

    /// Back to a fresh rally (on serve)
    pub fn reset(&mut self) {
        self.multiplier = 1.0;
        self.hits = 0;
    }
}

/// Per-side goal counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchScore {
    pub left: u32,
    pub right: u32,
}

impl MatchScore {
    pub fn for_side(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// The side currently ahead, if any
    pub fn leader(&self) -> Option<Side> {
        match self.left.cmp(&self.right) {
            std::cmp::Ordering::Greater => Some(Side::Left),
            std::cmp::Ordering::Less => Some(Side::Right),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Why a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeReason {
    TimeExpired,
    ScoreLimit,
}

/// Terminal result of a match. Produced once; never mutated afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    /// `None` means a draw (only possible on time expiry)
    pub winner: Option<Side>,
    pub reason: OutcomeReason,
}

/// Transient feedback events, drained by the renderer once per frame.
///
/// These are fire-and-forget signals, not simulation state: dropping them
/// changes nothing about the match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball struck a paddle; `offset` is the normalized strike position
    /// (-1.0 bottom edge .. 1.0 top edge)
    PaddleHit { side: Side, offset: f32 },
    /// A goal was scored. `flash` is the overlay color hint keyed to the
    /// conceding side; `shake` scales with the rally multiplier at the
    /// moment the ball crossed the line.
    GoalScored {
        scorer: Side,
        flash: [f32; 3],
        shake: f32,
    },
    /// The match reached its terminal outcome
    MatchOver { outcome: MatchOutcome },
}
