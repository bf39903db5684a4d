//! Deterministic match simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, advanced by a caller-supplied delta
//! - Seeded RNG only (goal serves draw from an injected source)
//! - Fixed resolution order (walls, left paddle, right paddle, goals)
//! - No rendering or platform dependencies

pub mod ai;
pub mod ball;
pub mod clock;
pub mod config;
pub mod paddle;
pub mod session;
pub mod state;

pub use clock::MatchClock;
pub use config::{Difficulty, MatchConfig, MatchDuration, MatchMode, ScoreLimit};
pub use paddle::MoveIntent;
pub use session::MatchSession;
pub use state::{
    Ball, MatchEvent, MatchOutcome, MatchScore, OutcomeReason, Paddle, RallyState, Side,
};
