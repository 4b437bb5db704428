//! Match Loop: one round at a fixed tick rate
//!
//! Per tick: sample input, check for quit, advance the simulation, emit cues,
//! render. The round ends when the simulation reports a winner.

use std::thread;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::audio::SoundEffect;
use crate::error::PresentError;
use crate::platform::{InputSource, Presenter};
use crate::renderer::FieldSnapshot;
use crate::sim::{GameState, RoundState, Side, TickInput, tick};

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Finished(Side),
    /// Player asked to close the game mid-round
    Quit,
}

/// Paces ticks to a fixed rate
#[derive(Debug, Clone)]
pub struct TickClock {
    period: Option<Duration>,
    next_deadline: Option<Instant>,
}

impl TickClock {
    /// Sleep so that ticks happen `rate` times per second
    pub fn fixed(rate: u32) -> Self {
        Self {
            period: Some(Duration::from_secs(1) / rate.max(1)),
            next_deadline: None,
        }
    }

    /// Never sleep
    pub fn unthrottled() -> Self {
        Self {
            period: None,
            next_deadline: None,
        }
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    /// Block until the next tick is due
    ///
    /// A loop that fell behind starts over from now rather than bursting.
    pub fn wait(&mut self) {
        let Some(period) = self.period else {
            return;
        };
        let now = Instant::now();
        let deadline = self.next_deadline.unwrap_or(now + period);
        if deadline > now {
            thread::sleep(deadline - now);
            self.next_deadline = Some(deadline + period);
        } else {
            self.next_deadline = Some(now + period);
        }
    }

    /// Forget the schedule (start of a round)
    pub fn restart(&mut self) {
        self.next_deadline = None;
    }
}

/// Run one tick against a platform
///
/// Returns the outcome once the round is over, `None` while it continues.
pub fn step<R, P>(
    state: &mut GameState,
    rng: &mut R,
    platform: &mut P,
) -> Result<Option<RoundOutcome>, PresentError>
where
    R: Rng + ?Sized,
    P: InputSource + Presenter + ?Sized,
{
    let input = platform.poll();
    if input.quit {
        log::info!("Quit requested");
        return Ok(Some(RoundOutcome::Quit));
    }

    let events = tick(
        state,
        &TickInput {
            pointer_y: input.pointer_y,
        },
        rng,
    );
    for effect in events.iter().filter_map(SoundEffect::for_event) {
        platform.play_cue(effect);
    }

    platform.render(&FieldSnapshot::new(state))?;

    Ok(match state.round {
        RoundState::Playing => None,
        RoundState::Finished(winner) => Some(RoundOutcome::Finished(winner)),
    })
}

/// Tick until the round is won or the player quits
pub fn run_round<R, P>(
    state: &mut GameState,
    rng: &mut R,
    platform: &mut P,
    clock: &mut TickClock,
) -> Result<RoundOutcome, PresentError>
where
    R: Rng + ?Sized,
    P: InputSource + Presenter + ?Sized,
{
    clock.restart();
    loop {
        if let Some(outcome) = step(state, rng, platform)? {
            return Ok(outcome);
        }
        clock.wait();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::InputFrame;
    use crate::sim::Score;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[derive(Default)]
    struct Recorder {
        inputs: Vec<InputFrame>,
        frames: Vec<GameState>,
        cues: Vec<SoundEffect>,
        fail_render: bool,
    }

    impl InputSource for Recorder {
        fn poll(&mut self) -> InputFrame {
            if self.inputs.is_empty() {
                InputFrame::default()
            } else {
                self.inputs.remove(0)
            }
        }
    }

    impl Presenter for Recorder {
        fn render(&mut self, frame: &FieldSnapshot<'_>) -> Result<(), PresentError> {
            if self.fail_render {
                return Err(PresentError::Io(std::io::Error::other("no surface")));
            }
            let mut state = GameState::new(&mut Pcg32::seed_from_u64(0));
            state.ball = frame.ball().clone();
            state.ai_paddle = frame.ai_paddle().clone();
            state.human_paddle = frame.human_paddle().clone();
            state.score = frame.score();
            state.round = frame.round();
            self.frames.push(state);
            Ok(())
        }

        fn play_cue(&mut self, effect: SoundEffect) {
            self.cues.push(effect);
        }
    }

    fn setup() -> (GameState, Pcg32) {
        let mut rng = Pcg32::seed_from_u64(21);
        (GameState::new(&mut rng), rng)
    }

    #[test]
    fn test_step_renders_once_per_tick() {
        let (mut state, mut rng) = setup();
        let mut platform = Recorder::default();
        for _ in 0..3 {
            assert_eq!(step(&mut state, &mut rng, &mut platform).unwrap(), None);
        }
        assert_eq!(platform.frames.len(), 3);
        assert_eq!(state.time_ticks, 3);
    }

    #[test]
    fn test_quit_stops_before_ticking() {
        let (mut state, mut rng) = setup();
        let mut platform = Recorder {
            inputs: vec![InputFrame {
                pointer_y: None,
                quit: true,
            }],
            ..Default::default()
        };
        let before = state.clone();
        let outcome = step(&mut state, &mut rng, &mut platform).unwrap();

        assert_eq!(outcome, Some(RoundOutcome::Quit));
        assert_eq!(state, before);
        assert!(platform.frames.is_empty());
    }

    #[test]
    fn test_pointer_reaches_paddle() {
        let (mut state, mut rng) = setup();
        let mut platform = Recorder {
            inputs: vec![InputFrame {
                pointer_y: Some(60.0),
                quit: false,
            }],
            ..Default::default()
        };
        step(&mut state, &mut rng, &mut platform).unwrap();
        assert_eq!(state.human_paddle.y, 30.0);
        assert_eq!(platform.frames[0].human_paddle.y, 30.0);
    }

    #[test]
    fn test_cues_follow_events() {
        let (mut state, mut rng) = setup();
        state.ball.pos = Vec2::new(300.0, 6.0);
        state.ball.vel = Vec2::new(6.0, -6.0);
        let mut platform = Recorder::default();
        step(&mut state, &mut rng, &mut platform).unwrap();
        assert_eq!(platform.cues, vec![SoundEffect::WallHit]);
    }

    #[test]
    fn test_winning_tick_is_rendered() {
        let (mut state, mut rng) = setup();
        state.score = Score { ai: 4, human: 2 };
        state.ball.pos = Vec2::new(595.0, 50.0);
        state.ball.vel = Vec2::new(6.0, 6.0);
        let mut platform = Recorder::default();
        let outcome = run_round(&mut state, &mut rng, &mut platform, &mut TickClock::unthrottled())
            .unwrap();

        assert_eq!(outcome, RoundOutcome::Finished(Side::Ai));
        assert_eq!(platform.frames.len(), 1);
        assert_eq!(platform.frames[0].score, Score { ai: 5, human: 2 });
        assert_eq!(platform.cues, vec![SoundEffect::Point]);
    }

    #[test]
    fn test_render_failure_is_fatal() {
        let (mut state, mut rng) = setup();
        let mut platform = Recorder {
            fail_render: true,
            ..Default::default()
        };
        let result = run_round(&mut state, &mut rng, &mut platform, &mut TickClock::unthrottled());
        assert!(matches!(result, Err(PresentError::Io(_))));
    }

    #[test]
    fn test_fixed_clock_period() {
        let clock = TickClock::fixed(60);
        assert_eq!(clock.period(), Some(Duration::from_secs(1) / 60));
        assert_eq!(TickClock::unthrottled().period(), None);
    }

    #[test]
    fn test_fixed_clock_paces() {
        let mut clock = TickClock::fixed(200);
        let start = Instant::now();
        for _ in 0..4 {
            clock.wait();
        }
        assert!(start.elapsed() >= Duration::from_millis(15));
    }
}
