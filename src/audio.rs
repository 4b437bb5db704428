//! Feedback cues
//!
//! Every bounce and every point gets a short beep. Playback is
//! fire-and-forget: failures are logged and dropped, never surfaced to the
//! game loop.

use std::io::Write;

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits top or bottom wall
    WallHit,
    /// Ball hits a paddle
    PaddleHit,
    /// Someone scored
    Point,
}

impl SoundEffect {
    /// Cue for a simulation event (round end has none of its own)
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::WallBounce => Some(SoundEffect::WallHit),
            GameEvent::PaddleHit(_) => Some(SoundEffect::PaddleHit),
            GameEvent::Scored(_) => Some(SoundEffect::Point),
            GameEvent::RoundOver(_) => None,
        }
    }
}

/// ASCII BEL, the terminal's own beep
const BELL: &[u8] = b"\x07";

/// Cue player writing terminal bells to a sink
pub struct AudioManager<W: Write> {
    out: W,
    muted: bool,
    played: u64,
}

impl<W: Write> AudioManager<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            muted: false,
            played: 0,
        }
    }

    /// Mute/unmute all cues
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Cues actually emitted so far
    pub fn played(&self) -> u64 {
        self.played
    }

    /// Play a sound effect; never fails
    pub fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        match self.out.write_all(BELL).and_then(|_| self.out.flush()) {
            Ok(()) => self.played += 1,
            Err(e) => log::debug!("Dropped {:?} cue: {}", effect, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Side;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_event_mapping() {
        assert_eq!(
            SoundEffect::for_event(&GameEvent::WallBounce),
            Some(SoundEffect::WallHit)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::PaddleHit(Side::Ai)),
            Some(SoundEffect::PaddleHit)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::Scored(Side::Human)),
            Some(SoundEffect::Point)
        );
        assert_eq!(SoundEffect::for_event(&GameEvent::RoundOver(Side::Ai)), None);
    }

    #[test]
    fn test_play_writes_bell() {
        let mut audio = AudioManager::new(Vec::new());
        audio.play(SoundEffect::PaddleHit);
        audio.play(SoundEffect::Point);
        assert_eq!(audio.played(), 2);
        assert_eq!(audio.out, b"\x07\x07");
    }

    #[test]
    fn test_muted_is_silent() {
        let mut audio = AudioManager::new(Vec::new());
        audio.set_muted(true);
        audio.play(SoundEffect::WallHit);
        assert!(audio.out.is_empty());
        assert_eq!(audio.played(), 0);
    }

    #[test]
    fn test_failure_is_swallowed() {
        let mut audio = AudioManager::new(BrokenPipe);
        audio.play(SoundEffect::WallHit);
        assert_eq!(audio.played(), 0);
    }
}
