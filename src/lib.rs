//! Paddle Rivals - a themed two-paddle arcade rivalry game
//!
//! Core modules:
//! - `sim`: Deterministic match simulation (physics, collisions, AI, scoring)
//! - `shell`: Menu screen state machine feeding the sim its configuration
//! - `settings`: Persisted preferences (game time, max score, theme)
//! - `theme` / `profile`: Renderer-facing color tables and player identity
//! - `audio`: Fire-and-forget sound cue queue

pub mod audio;
pub mod profile;
pub mod settings;
pub mod shell;
pub mod sim;
pub mod theme;

pub use settings::Settings;
pub use theme::Theme;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz nominal tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Court dimensions
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 16.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Human paddle speed (pixels/s)
    pub const PADDLE_SPEED: f32 = 480.0;
    /// Distance from the court edge at which paddles spawn
    pub const PADDLE_SPAWN_INSET: f32 = 80.0;

    /// Outer margin of the paddle's lateral band (distance from court edge)
    pub const EDGE_MARGIN: f32 = 40.0;
    /// Inner margin of the lateral band (distance from the centerline)
    pub const CENTER_MARGIN: f32 = 60.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.0;
    /// Base horizontal ball speed (pixels/s)
    pub const BALL_SPEED_X: f32 = 360.0;
    /// Base vertical ball speed (pixels/s)
    pub const BALL_SPEED_Y: f32 = 240.0;

    /// Vertical deflection added per unit of paddle-strike offset (pixels/s)
    pub const SPIN_DEFLECTION: f32 = 90.0;

    /// Rally ramp: multiplier gained per paddle hit
    pub const RALLY_STEP: f32 = 0.05;
    /// Rally ramp ceiling
    pub const RALLY_CAP: f32 = 2.0;

    /// Where the AI paddle retreats to when the ball is on the far half
    pub const AI_GUARD_X: f32 = COURT_WIDTH - PADDLE_SPAWN_INSET;
    /// AI lateral tracking rate relative to its vertical rate
    pub const AI_LATERAL_FACTOR: f32 = 0.7;

    /// Camera-shake scale applied to the rally multiplier on a goal
    pub const GOAL_SHAKE_SCALE: f32 = 3.0;
    /// Screen-flash overlay when the left side concedes (red)
    pub const FLASH_LEFT_CONCEDES: [f32; 3] = [1.0, 0.2, 0.2];
    /// Screen-flash overlay when the right side concedes (blue)
    pub const FLASH_RIGHT_CONCEDES: [f32; 3] = [0.2, 0.5, 1.0];
}
