//! Cat Pong - two-paddle arcade Pong against a reactive AI cat
//!
//! Core modules:
//! - `sim`: Deterministic simulation (collisions, AI, game state)
//! - `match_loop`: Fixed-rate loop for a single round
//! - `session`: Round-to-round lifecycle and rematch handling
//! - `renderer`: State to draw primitives, rasterized into terminal cells
//! - `platform`: External boundary (presentation, input, prompt)
//! - `audio`: Best-effort feedback cues

pub mod audio;
pub mod error;
pub mod match_loop;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::{PresentError, PromptError, SettingsError};
pub use match_loop::{RoundOutcome, TickClock, run_round};
pub use session::{Session, SessionEnd};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Field dimensions (logical pixels)
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Paddle size
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 60.0;
    /// AI paddle sits 10px off the left wall
    pub const AI_PADDLE_X: f32 = 10.0;
    /// Human paddle sits 10px off the right wall
    pub const HUMAN_PADDLE_X: f32 = FIELD_WIDTH - 20.0;
    /// Paddle step per tick (AI tracking, keyboard nudge)
    pub const PADDLE_SPEED: f32 = 6.0;

    /// Ball is a square
    pub const BALL_SIZE: f32 = 10.0;
    /// Per-axis ball speed (pixels per tick); only the sign ever changes
    pub const BALL_SPEED: f32 = 6.0;

    /// First side to this many points wins the round
    pub const WIN_SCORE: u32 = 5;

    /// Simulation/render rate
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Highest valid paddle top edge
    pub const PADDLE_MAX_Y: f32 = FIELD_HEIGHT - PADDLE_HEIGHT;
}
