//! Match configuration
//!
//! Every option is an enumerated type: the menu layer can only hand the
//! core values from the legal sets, so the core never validates input.
//! A `MatchConfig` is immutable for the duration of a match.

use serde::{Deserialize, Serialize};

/// Match length choices offered by the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MatchDuration {
    Sixty,
    #[default]
    Ninety,
    OneTwenty,
}

impl MatchDuration {
    pub const ALL: [Self; 3] = [Self::Sixty, Self::Ninety, Self::OneTwenty];

    pub fn secs(self) -> f32 {
        match self {
            Self::Sixty => 60.0,
            Self::Ninety => 90.0,
            Self::OneTwenty => 120.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sixty => "60 sec",
            Self::Ninety => "90 sec",
            Self::OneTwenty => "120 sec",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, -1)
    }
}

/// Score cap choices; `Unlimited` means the match only ends on time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScoreLimit {
    Three,
    #[default]
    Five,
    Seven,
    Unlimited,
}

impl ScoreLimit {
    pub const ALL: [Self; 4] = [Self::Three, Self::Five, Self::Seven, Self::Unlimited];

    /// The goal count that ends the match, `None` for unlimited
    pub fn limit(self) -> Option<u32> {
        match self {
            Self::Three => Some(3),
            Self::Five => Some(5),
            Self::Seven => Some(7),
            Self::Unlimited => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Three => "3",
            Self::Five => "5",
            Self::Seven => "7",
            Self::Unlimited => "Infinite",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, -1)
    }
}

/// AI skill tier. The tier sets the AI paddle's full-rate speed; lateral
/// tracking runs at a fraction of it so cross-court shots stay winnable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Full-rate AI paddle speed in pixels/s
    pub fn base_speed(self) -> f32 {
        match self {
            Self::Easy => 300.0,
            Self::Medium => 480.0,
            Self::Hard => 660.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// HUD name for the AI opponent
    pub fn ai_name(self) -> &'static str {
        match self {
            Self::Easy => "AI (Easy)",
            Self::Medium => "AI (Medium)",
            Self::Hard => "AI (Hard)",
        }
    }
}

/// Who controls the right paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    SinglePlayer(Difficulty),
    TwoPlayer,
}

impl Default for MatchMode {
    fn default() -> Self {
        Self::SinglePlayer(Difficulty::default())
    }
}

impl MatchMode {
    pub fn is_single_player(self) -> bool {
        matches!(self, Self::SinglePlayer(_))
    }
}

/// Full configuration for one match, assembled by the menu shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchConfig {
    pub duration: MatchDuration,
    pub score_limit: ScoreLimit,
    pub mode: MatchMode,
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, dir: isize) -> T {
    let len = all.len() as isize;
    let idx = all.iter().position(|&v| v == current).unwrap_or(0) as isize;
    all[((idx + dir).rem_euclid(len)) as usize]
}
