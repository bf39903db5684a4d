//! Match countdown clock

use super::config::MatchDuration;

/// Counts a configured match duration down to zero.
///
/// Pure data transform: `advance` floors at zero, `expired` reports the
/// terminal condition. The clock never errors.
#[derive(Debug, Clone)]
pub struct MatchClock {
    remaining: f32,
}

impl MatchClock {
    pub fn new(duration: MatchDuration) -> Self {
        Self {
            remaining: duration.secs(),
        }
    }

    /// Advance by `dt` seconds, flooring the remaining time at zero
    pub fn advance(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }

    /// Seconds left in the match
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// True once the countdown has reached zero
    pub fn expired(&self) -> bool {
        self.remaining <= 0.0
    }
}
