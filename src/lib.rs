//! Canvas Pong - a single-screen Pong clone
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddles, collisions, scoring)
//! - `session`: Loop driver (run/pause/stop, restart, FPS tracking)
//! - `renderer`: Canvas drawing commands and the per-frame draw pass
//! - `input`: Pointer and keyboard mapping
//! - `settings`/`tuning`: Persisted preferences and gameplay constants

pub mod error;
pub mod input;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{GameError, Result};
pub use session::{RunState, Session, StopToken};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Default playfield size (used when no canvas is available)
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 480.0;

    /// Paddle geometry
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    /// Gap between a paddle and its side of the playfield
    pub const PADDLE_MARGIN: f32 = 10.0;

    /// Ball is a square of this side length
    pub const BALL_SIZE: f32 = 16.0;

    /// Colors (CSS strings, handed straight to the canvas)
    pub const BACKGROUND_COLOR: &str = "#111";
    pub const DIVIDER_COLOR: &str = "#333";
    pub const PLAYER_COLOR: &str = "#00e0ff";
    pub const AI_COLOR: &str = "#ff2070";
    pub const BALL_COLOR: &str = "#fff";

    /// Center divider dash pattern (on, off)
    pub const DIVIDER_DASH: [f64; 2] = [12.0, 12.0];

    /// Score text
    pub const SCORE_FONT_SIZE: f32 = 48.0;
    pub const SCORE_BASELINE_Y: f32 = 60.0;
}
