//! Session Controller
//!
//! Owns the round state and the RNG, runs rounds back to back, and asks the
//! player for a rematch after each one.

use rand::Rng;

use crate::error::PresentError;
use crate::match_loop::{RoundOutcome, TickClock, run_round};
use crate::platform::Platform;
use crate::sim::{GameState, Score, Side};

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Quit signal during a round
    Quit,
    /// Rematch declined, or the prompt could not be answered
    Declined,
}

/// Result of one finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRecord {
    pub winner: Side,
    pub score: Score,
}

/// Round-to-round lifecycle over a platform
pub struct Session<R: Rng, P: Platform> {
    state: GameState,
    rng: R,
    platform: P,
    clock: TickClock,
    history: Vec<RoundRecord>,
}

impl<R: Rng, P: Platform> Session<R, P> {
    /// Set up the first round
    pub fn new(mut rng: R, platform: P, clock: TickClock) -> Self {
        let state = GameState::new(&mut rng);
        Self {
            state,
            rng,
            platform,
            clock,
            history: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Finished rounds, oldest first
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Reset the round state for a fresh round
    pub fn start_next_round(&mut self) {
        self.state.reset(&mut self.rng);
        log::info!("Round {} starting", self.history.len() + 1);
    }

    /// Play rounds until the player quits or declines a rematch
    ///
    /// A frame sink failure aborts the session with that error.
    pub fn run(&mut self) -> Result<SessionEnd, PresentError> {
        log::info!("Round {} starting", self.history.len() + 1);
        let end = loop {
            let outcome = run_round(&mut self.state, &mut self.rng, &mut self.platform, &mut self.clock)?;
            let winner = match outcome {
                RoundOutcome::Quit => break SessionEnd::Quit,
                RoundOutcome::Finished(winner) => winner,
            };

            let record = RoundRecord {
                winner,
                score: self.state.score,
            };
            log::info!(
                "Round {} over: {} wins ({})",
                self.history.len() + 1,
                record.winner,
                record.score
            );
            self.history.push(record);

            let again = match self.platform.ask_rematch(winner) {
                Ok(again) => again,
                Err(e) => {
                    log::warn!("Rematch prompt failed, ending session: {}", e);
                    false
                }
            };
            log::info!("Rematch {}", if again { "accepted" } else { "declined" });
            if !again {
                break SessionEnd::Declined;
            }
            self.start_next_round();
        };

        let ai_wins = self.history.iter().filter(|r| r.winner == Side::Ai).count();
        log::info!(
            "Session over ({:?}): {} rounds, AI Cat {} - {} You",
            end,
            self.history.len(),
            ai_wins,
            self.history.len() - ai_wins
        );
        Ok(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SoundEffect;
    use crate::error::PromptError;
    use crate::platform::{InputFrame, InputSource, Presenter, RematchPrompt};
    use crate::renderer::FieldSnapshot;
    use crate::sim::RoundState;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    struct Idle;

    impl InputSource for Idle {
        fn poll(&mut self) -> InputFrame {
            InputFrame::default()
        }
    }

    impl Presenter for Idle {
        fn render(&mut self, _frame: &FieldSnapshot<'_>) -> Result<(), PresentError> {
            Ok(())
        }

        fn play_cue(&mut self, _effect: SoundEffect) {}
    }

    impl RematchPrompt for Idle {
        fn ask_rematch(&mut self, _winner: Side) -> Result<bool, PromptError> {
            Err(PromptError::Unavailable)
        }
    }

    #[test]
    fn test_start_next_round_resets_everything() {
        let mut session = Session::new(Pcg32::seed_from_u64(8), Idle, TickClock::unthrottled());
        session.state.score = Score { ai: 5, human: 3 };
        session.state.round = RoundState::Finished(Side::Ai);
        session.state.ball.pos = Vec2::new(12.0, 34.0);
        session.state.ai_paddle.y = 0.0;
        session.state.human_paddle.y = 340.0;

        session.start_next_round();

        let state = session.state();
        assert_eq!(state.score, Score::default());
        assert_eq!(state.round, RoundState::Playing);
        assert_eq!(state.ball.pos, Vec2::new(300.0, 200.0));
        assert_eq!(state.ai_paddle.y, 170.0);
        assert_eq!(state.human_paddle.y, 170.0);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_prompt_failure_declines() {
        let mut session = Session::new(Pcg32::seed_from_u64(8), Idle, TickClock::unthrottled());
        session.state.score = Score { ai: 4, human: 0 };
        session.state.ball.pos = Vec2::new(595.0, 50.0);
        session.state.ball.vel = Vec2::new(6.0, 6.0);

        assert_eq!(session.run().unwrap(), SessionEnd::Declined);
        assert_eq!(
            session.history(),
            &[RoundRecord {
                winner: Side::Ai,
                score: Score { ai: 5, human: 0 }
            }]
        );
    }
}
