//! Platform abstraction layer
//!
//! The game core only talks to the outside world through these traits:
//! - Frame sink and cues (`Presenter`)
//! - Pointer position and quit signal (`InputSource`)
//! - Rematch question (`RematchPrompt`)
//!
//! `terminal` implements all three on top of crossterm.

pub mod terminal;

pub use terminal::TerminalPlatform;

use crate::audio::SoundEffect;
use crate::error::{PresentError, PromptError};
use crate::renderer::FieldSnapshot;
use crate::sim::Side;

/// Everything sampled from the player once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputFrame {
    /// Pointer height in field coordinates, if known
    pub pointer_y: Option<f32>,
    /// Player asked to close the game
    pub quit: bool,
}

/// Polled once per tick; must never block
pub trait InputSource {
    fn poll(&mut self) -> InputFrame;
}

/// Frame sink and audio cues
pub trait Presenter {
    /// Draw one frame. Failure ends the session.
    fn render(&mut self, frame: &FieldSnapshot<'_>) -> Result<(), PresentError>;

    /// Fire-and-forget feedback tone
    fn play_cue(&mut self, effect: SoundEffect);
}

/// Asked once per finished round; blocks until answered
pub trait RematchPrompt {
    /// `Ok(true)` starts another round
    fn ask_rematch(&mut self, winner: Side) -> Result<bool, PromptError>;
}

/// A complete frontend
pub trait Platform: Presenter + InputSource + RematchPrompt {}

impl<T: Presenter + InputSource + RematchPrompt> Platform for T {}

/// Question shown when a round ends
pub fn rematch_message(winner: Side) -> String {
    format!("Game Over! Winner: {winner}. Play again?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rematch_message() {
        assert_eq!(
            rematch_message(Side::Ai),
            "Game Over! Winner: AI Cat. Play again?"
        );
        assert_eq!(
            rematch_message(Side::Human),
            "Game Over! Winner: You. Play again?"
        );
    }
}
