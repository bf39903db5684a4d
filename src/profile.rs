//! Player identity: names and avatars
//!
//! Avatars are small color/shape badges shown on the HUD and the avatar
//! picker. Like themes, all of it is renderer-facing data.

use crate::sim::Difficulty;

/// Maximum stored name length in characters
pub const MAX_NAME_LEN: usize = 31;

/// Number of selectable avatars
pub const AVATAR_COUNT: usize = 4;

/// Badge shape drawn for an avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarShape {
    Circle,
    Shield,
    Star,
    Hexagon,
}

/// An avatar's render style
#[derive(Debug, Clone, Copy)]
pub struct AvatarStyle {
    pub shape: AvatarShape,
    pub color: [f32; 3],
}

/// The selectable avatar table, indexed by avatar id
pub const AVATAR_STYLES: [AvatarStyle; AVATAR_COUNT] = [
    AvatarStyle {
        shape: AvatarShape::Circle,
        color: [0.2, 0.8, 1.0],
    },
    AvatarStyle {
        shape: AvatarShape::Shield,
        color: [1.0, 0.4, 0.4],
    },
    AvatarStyle {
        shape: AvatarShape::Star,
        color: [0.3, 1.0, 0.5],
    },
    AvatarStyle {
        shape: AvatarShape::Hexagon,
        color: [1.0, 0.9, 0.3],
    },
];

/// One player's display identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProfile {
    pub name: String,
    pub avatar: usize,
}

impl PlayerProfile {
    /// Default identity for a court side (1-based player number)
    pub fn default_for(player: usize) -> Self {
        Self {
            name: format!("Player {}", player),
            avatar: (player - 1) % AVATAR_COUNT,
        }
    }

    /// The AI opponent's identity for a difficulty tier
    pub fn for_ai(difficulty: Difficulty) -> Self {
        Self {
            name: difficulty.ai_name().to_string(),
            avatar: 1,
        }
    }

    /// Install a typed name, falling back to the default when blank and
    /// truncating to the stored maximum
    pub fn set_name(&mut self, typed: &str, player: usize) {
        let trimmed = typed.trim();
        self.name = if trimmed.is_empty() {
            format!("Player {}", player)
        } else {
            trimmed.chars().take(MAX_NAME_LEN).collect()
        };
    }

    pub fn style(&self) -> AvatarStyle {
        AVATAR_STYLES[self.avatar % AVATAR_COUNT]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_falls_back_to_default() {
        let mut profile = PlayerProfile::default_for(2);
        profile.set_name("   ", 2);
        assert_eq!(profile.name, "Player 2");
    }

    #[test]
    fn long_names_are_truncated() {
        let mut profile = PlayerProfile::default_for(1);
        profile.set_name(&"x".repeat(80), 1);
        assert_eq!(profile.name.len(), MAX_NAME_LEN);
    }

    #[test]
    fn ai_profile_names_track_difficulty() {
        assert_eq!(PlayerProfile::for_ai(Difficulty::Hard).name, "AI (Hard)");
    }
}
