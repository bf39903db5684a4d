//! Visual themes
//!
//! Pure data for the renderer: each theme carries the color hints the
//! drawing layer needs. The simulation never reads any of this.

use serde::{Deserialize, Serialize};

/// Available court/menu themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    NeonNight,
    CosmicField,
    #[default]
    RetroGrid,
}

impl Theme {
    pub const ALL: [Self; 3] = [Self::NeonNight, Self::CosmicField, Self::RetroGrid];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::NeonNight => "Neon Night",
            Theme::CosmicField => "Cosmic Field",
            Theme::RetroGrid => "Retro Grid",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "neon night" | "neon" => Some(Theme::NeonNight),
            "cosmic field" | "cosmic" => Some(Theme::CosmicField),
            "retro grid" | "retro" => Some(Theme::RetroGrid),
            _ => None,
        }
    }

    /// Title text color on the main menu
    pub fn title_color(&self) -> [f32; 3] {
        match self {
            Theme::NeonNight => [1.0, 0.3, 0.9],
            Theme::CosmicField => [0.4, 1.0, 0.6],
            Theme::RetroGrid => [0.3, 1.0, 1.0],
        }
    }

    /// Highlight bar behind the selected menu entry
    pub fn highlight_color(&self) -> [f32; 3] {
        match self {
            Theme::NeonNight => [0.0, 1.0, 0.7],
            Theme::CosmicField => [0.4, 0.7, 1.0],
            Theme::RetroGrid => [1.0, 0.6, 0.2],
        }
    }

    /// Translucent glow drawn around the ball (rgba)
    pub fn ball_glow(&self) -> [f32; 4] {
        match self {
            Theme::NeonNight => [0.2, 1.0, 1.0, 0.4],
            Theme::CosmicField => [0.7, 0.7, 1.0, 0.4],
            Theme::RetroGrid => [1.0, 0.5, 0.2, 0.4],
        }
    }

    pub fn next(self) -> Self {
        match self {
            Theme::NeonNight => Theme::CosmicField,
            Theme::CosmicField => Theme::RetroGrid,
            Theme::RetroGrid => Theme::NeonNight,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Theme::NeonNight => Theme::RetroGrid,
            Theme::CosmicField => Theme::NeonNight,
            Theme::RetroGrid => Theme::CosmicField,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_visits_every_theme() {
        let mut theme = Theme::default();
        let mut seen = Vec::new();
        for _ in 0..Theme::ALL.len() {
            seen.push(theme);
            theme = theme.next();
        }
        assert_eq!(theme, Theme::default());
        for t in Theme::ALL {
            assert!(seen.contains(&t));
        }
    }

    #[test]
    fn from_str_round_trips() {
        for t in Theme::ALL {
            assert_eq!(Theme::from_str(t.as_str()), Some(t));
        }
        assert_eq!(Theme::from_str("plasma"), None);
    }
}
