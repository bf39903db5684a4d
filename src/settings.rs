//! Game settings and preferences
//!
//! Persisted as JSON next to the executable (or wherever the caller
//! points). Every option is an enumerated type from the sim config, so a
//! settings file can never smuggle an out-of-range value into a match.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::{Difficulty, MatchConfig, MatchDuration, MatchMode, ScoreLimit};
use crate::theme::Theme;

/// Menu-owned preferences that outlive a single match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Match length handed to new matches
    pub game_time: MatchDuration,
    /// Score cap handed to new matches
    pub max_score: ScoreLimit,
    /// Active visual theme
    pub theme: Theme,
}

impl Settings {
    /// Snapshot these settings into an immutable per-match config
    pub fn match_config(&self, single_player: bool, difficulty: Difficulty) -> MatchConfig {
        MatchConfig {
            duration: self.game_time,
            score_limit: self.max_score,
            mode: if single_player {
                MatchMode::SinglePlayer(difficulty)
            } else {
                MatchMode::TwoPlayer
            },
        }
    }

    /// Load settings from a JSON file, falling back to defaults on any
    /// missing or unreadable file
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("settings file {} is invalid: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings as JSON
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("settings saved to {}", path.display());
        Ok(())
    }
}
