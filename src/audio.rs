//! Audio cues
//!
//! The simulation and shell emit fire-and-forget cues; whatever owns the
//! audio device drains the queue each frame. Playback failure is not a
//! game error and nothing here feeds back into the simulation.

use crate::sim::{MatchEvent, Side};

/// Sound effect and music cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Ball hits a paddle
    PaddleHit,
    /// Ball hits the top or bottom wall
    WallBounce,
    /// A goal was scored against the given side
    GoalConceded(Side),
    /// Match reached its terminal outcome
    MatchOver,
    /// Background music starts (match begins)
    MusicStart,
    /// Background music stops (match over or back to menu)
    MusicStop,
}

/// Pending cues, drained once per frame by the playback layer
#[derive(Debug, Default)]
pub struct CueQueue {
    cues: Vec<SoundCue>,
}

impl CueQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cue: SoundCue) {
        self.cues.push(cue);
    }

    /// Translate one simulation event into its cue, if it has one
    pub fn push_event(&mut self, event: &MatchEvent) {
        match event {
            MatchEvent::PaddleHit { .. } => self.push(SoundCue::PaddleHit),
            MatchEvent::WallBounce => self.push(SoundCue::WallBounce),
            MatchEvent::GoalScored { scorer, .. } => {
                self.push(SoundCue::GoalConceded(scorer.opponent()));
            }
            MatchEvent::MatchOver { .. } => {
                self.push(SoundCue::MatchOver);
                self.push(SoundCue::MusicStop);
            }
        }
    }

    pub fn drain(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.cues)
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }
}
