//! Audible and visual feedback for moves.

#[cfg(feature = "audio")]
mod audio;
mod flicker;
mod sound;

#[cfg(feature = "audio")]
pub use audio::{AudioError, RodioSink};
pub use flicker::{Flicker, FlickerSchedule};
pub use sound::{SilentSink, SoundCue, SoundSink, TerminalBell, Tone};

use tictac_engine::{MoveReport, Outcome};
use tracing::instrument;
#[cfg(feature = "audio")]
use tracing::warn;

/// Best available sink: speakers when built with `audio` and a device
/// opens, otherwise the terminal bell.
pub fn default_sink() -> Box<dyn SoundSink> {
    #[cfg(feature = "audio")]
    {
        match RodioSink::try_new() {
            Ok(sink) => return Box::new(sink),
            Err(e) => warn!(error = %e, "Falling back to terminal bell"),
        }
    }
    Box::new(TerminalBell::stdout())
}

/// Routes move results to a [`SoundSink`].
pub struct Feedback {
    sink: Box<dyn SoundSink>,
}

impl std::fmt::Debug for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Feedback").finish_non_exhaustive()
    }
}

impl Default for Feedback {
    fn default() -> Self {
        Self::new(Box::new(SilentSink))
    }
}

impl Feedback {
    /// Creates feedback that plays through `sink`.
    pub fn new(sink: Box<dyn SoundSink>) -> Self {
        Self { sink }
    }

    /// Cues for a successful move: the mover's cue, then `Win` or `Draw`
    /// if the move ended the game.
    pub fn cues_for(report: &MoveReport) -> Vec<SoundCue> {
        let mut cues = vec![SoundCue::for_move(report.player)];
        match report.outcome {
            Outcome::Win { .. } => cues.push(SoundCue::Win),
            Outcome::Draw => cues.push(SoundCue::Draw),
            Outcome::InProgress => {}
        }
        cues
    }

    /// Plays the cues for a successful move.
    #[instrument(skip(self))]
    pub fn on_move(&mut self, report: &MoveReport, sound_enabled: bool) {
        if !sound_enabled {
            return;
        }
        for cue in Self::cues_for(report) {
            self.sink.play(cue);
        }
    }
}
