//! Rendering module
//!
//! Two stages, both backend-neutral:
//! - `scene`: field snapshot to a list of colored rectangles and text
//! - `raster`: scene to a character-cell grid for a given terminal size

pub mod raster;
pub mod scene;

pub use raster::{CellGrid, Viewport};
pub use scene::{Rgb, Scene, Shape};

use crate::sim::{Ball, GameState, Paddle, RoundState, Score};

/// Read-only view of the state handed to a frame sink
///
/// Holds a shared borrow, so nothing drawing from it can alter the round.
#[derive(Debug, Clone, Copy)]
pub struct FieldSnapshot<'a> {
    state: &'a GameState,
}

impl<'a> FieldSnapshot<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    pub fn ball(&self) -> &'a Ball {
        &self.state.ball
    }

    pub fn ai_paddle(&self) -> &'a Paddle {
        &self.state.ai_paddle
    }

    pub fn human_paddle(&self) -> &'a Paddle {
        &self.state.human_paddle
    }

    pub fn score(&self) -> Score {
        self.state.score
    }

    pub fn round(&self) -> RoundState {
        self.state.round
    }
}
