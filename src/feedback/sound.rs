//! Sound cues, their tones, and the sinks that play them.

use std::io::Write;
use std::time::Duration;

use tictac_engine::Player;
use tracing::{debug, warn};

/// Named sound events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, strum::EnumIter)]
pub enum SoundCue {
    /// X placed a mark.
    #[display("move_x")]
    MoveX,
    /// O placed a mark.
    #[display("move_o")]
    MoveO,
    /// A move won the game.
    #[display("win")]
    Win,
    /// A move filled the board without a winner.
    #[display("draw")]
    Draw,
}

/// One sine tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Pitch in hertz.
    pub frequency_hz: f32,
    /// How long the tone sounds.
    pub duration: Duration,
}

impl Tone {
    const fn new(frequency_hz: f32, millis: u64) -> Self {
        Self {
            frequency_hz,
            duration: Duration::from_millis(millis),
        }
    }
}

const MOVE_X_TONES: [Tone; 1] = [Tone::new(659.25, 80)];
const MOVE_O_TONES: [Tone; 1] = [Tone::new(440.0, 80)];
// C5 E5 G5, rising.
const WIN_TONES: [Tone; 3] = [
    Tone::new(523.25, 120),
    Tone::new(659.25, 120),
    Tone::new(783.99, 200),
];
// G4 E4, falling.
const DRAW_TONES: [Tone; 2] = [Tone::new(392.0, 150), Tone::new(329.63, 250)];

impl SoundCue {
    /// Cue for a mark placed by `player`.
    pub fn for_move(player: Player) -> Self {
        match player {
            Player::X => SoundCue::MoveX,
            Player::O => SoundCue::MoveO,
        }
    }

    /// Tones played for this cue, in order.
    pub fn tones(self) -> &'static [Tone] {
        match self {
            SoundCue::MoveX => &MOVE_X_TONES,
            SoundCue::MoveO => &MOVE_O_TONES,
            SoundCue::Win => &WIN_TONES,
            SoundCue::Draw => &DRAW_TONES,
        }
    }

    /// How many bells the terminal rings for this cue, one per tone.
    pub fn bell_count(self) -> usize {
        self.tones().len()
    }
}

/// Something that can play cues.
pub trait SoundSink: Send {
    /// Plays `cue`. Failures are logged, never surfaced.
    fn play(&mut self, cue: SoundCue);
}

/// Rings the terminal bell. Used when no audio device is available.
#[derive(Debug)]
pub struct TerminalBell<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> TerminalBell<W> {
    /// Rings bells on `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalBell<std::io::Stdout> {
    /// Rings bells on standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> SoundSink for TerminalBell<W> {
    fn play(&mut self, cue: SoundCue) {
        debug!(%cue, "Ringing terminal bell");
        let bells = vec![0x07_u8; cue.bell_count()];
        if let Err(e) = self.out.write_all(&bells).and_then(|()| self.out.flush()) {
            warn!(%cue, error = %e, "Failed to ring terminal bell");
        }
    }
}

/// Plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl SoundSink for SilentSink {
    fn play(&mut self, cue: SoundCue) {
        debug!(%cue, "Cue muted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_bell_rings_once_per_tone() {
        let mut bell = TerminalBell::new(Vec::new());
        bell.play(SoundCue::MoveX);
        bell.play(SoundCue::Win);
        assert_eq!(bell.into_inner(), vec![0x07; 4]);
    }

    #[test]
    fn test_cue_for_move() {
        assert_eq!(SoundCue::for_move(Player::X), SoundCue::MoveX);
        assert_eq!(SoundCue::for_move(Player::O), SoundCue::MoveO);
    }

    #[test]
    fn test_every_cue_sounds_different() {
        let cues: Vec<SoundCue> = SoundCue::iter().collect();
        for (i, a) in cues.iter().enumerate() {
            assert!(!a.tones().is_empty(), "{a} has no tones");
            for b in &cues[i + 1..] {
                assert_ne!(a.tones(), b.tones(), "{a} and {b} share tones");
            }
        }
    }

    #[test]
    fn test_win_rises_and_draw_falls() {
        let win = SoundCue::Win.tones();
        assert!(win.windows(2).all(|w| w[0].frequency_hz < w[1].frequency_hz));
        let draw = SoundCue::Draw.tones();
        assert!(draw.windows(2).all(|w| w[0].frequency_hz > w[1].frequency_hz));
    }
}
