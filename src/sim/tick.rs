//! Fixed-step simulation tick
//!
//! Advances one round by exactly one tick. Update order:
//! 1. Human paddle follows the pointer
//! 2. AI paddle takes one tracking step
//! 3. Ball moves
//! 4. Collision pass (walls, paddles, exits)
//! 5. Win check

use rand::Rng;

use super::ai::track_ball;
use super::collision;
use super::state::{GameEvent, GameState, RoundState, Side};
use crate::consts::*;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Pointer height in field coordinates; `None` until the pointer is seen
    pub pointer_y: Option<f32>,
}

impl TickInput {
    pub fn pointer(y: f32) -> Self {
        Self { pointer_y: Some(y) }
    }
}

/// Advance the round by one tick, returning what happened in order
///
/// Does nothing once the round is finished.
pub fn tick<R: Rng + ?Sized>(state: &mut GameState, input: &TickInput, rng: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.round.is_finished() {
        return events;
    }

    state.time_ticks += 1;

    if let Some(pointer_y) = input.pointer_y {
        state.human_paddle.follow_pointer(pointer_y);
    }

    state.ai_paddle.y = track_ball(&state.ball, &state.ai_paddle, PADDLE_SPEED);

    state.ball.advance();

    collision::resolve(state, rng, &mut events);

    if let Some(winner) = check_winner(state) {
        state.round = RoundState::Finished(winner);
        events.push(GameEvent::RoundOver(winner));
    }

    events
}

/// Winner if either side has reached the threshold
///
/// The AI side is checked first, so it wins if both somehow got there.
pub fn check_winner(state: &GameState) -> Option<Side> {
    if state.score.ai >= WIN_SCORE {
        Some(Side::Ai)
    } else if state.score.human >= WIN_SCORE {
        Some(Side::Human)
    } else {
        None
    }
}
