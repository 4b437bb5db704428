//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only
//! - Injected, seedable RNG only
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use ai::track_ball;
pub use collision::{overlaps, reflect};
pub use rect::Rect;
pub use state::{Ball, GameEvent, GameState, Paddle, RoundState, Score, Side};
pub use tick::{TickInput, check_winner, tick};
