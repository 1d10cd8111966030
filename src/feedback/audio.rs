//! Speaker playback through rodio.

use std::sync::mpsc;
use std::thread;

use derive_more::{Display, Error};
use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};
use tracing::{debug, info, instrument, warn};

use super::sound::{SoundCue, SoundSink};

const VOLUME: f32 = 0.2;

/// Audio setup error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Audio error: {} at {}:{}", message, file, line)]
pub struct AudioError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl AudioError {
    /// Creates a new audio error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Plays each cue's tones on the default output device.
///
/// The output stream lives on a dedicated thread; this handle only sends
/// cues to it. Dropping the handle stops the thread.
#[derive(Debug)]
pub struct RodioSink {
    tx: mpsc::Sender<SoundCue>,
}

impl RodioSink {
    /// Opens the default output device.
    ///
    /// # Errors
    ///
    /// Fails if there is no usable output device.
    #[instrument]
    pub fn try_new() -> Result<Self, AudioError> {
        let (tx, rx) = mpsc::channel::<SoundCue>();
        let (ready_tx, ready_rx) = mpsc::channel::<Result<(), String>>();

        thread::Builder::new()
            .name("tictac-audio".to_string())
            .spawn(move || {
                let (_stream, handle) = match OutputStream::try_default() {
                    Ok(pair) => pair,
                    Err(e) => {
                        let _ = ready_tx.send(Err(e.to_string()));
                        return;
                    }
                };
                let sink = match Sink::try_new(&handle) {
                    Ok(sink) => sink,
                    Err(e) => {
                        let _ = ready_tx.send(Err(e.to_string()));
                        return;
                    }
                };
                let _ = ready_tx.send(Ok(()));

                for cue in rx {
                    debug!(%cue, "Playing cue");
                    for tone in cue.tones() {
                        sink.append(
                            SineWave::new(tone.frequency_hz)
                                .take_duration(tone.duration)
                                .amplify(VOLUME),
                        );
                    }
                }
                sink.sleep_until_end();
            })
            .map_err(|e| AudioError::new(format!("Failed to start audio thread: {e}")))?;

        match ready_rx.recv() {
            Ok(Ok(())) => {
                info!("Audio output initialized");
                Ok(Self { tx })
            }
            Ok(Err(message)) => Err(AudioError::new(message)),
            Err(_) => Err(AudioError::new("Audio thread exited during setup")),
        }
    }
}

impl SoundSink for RodioSink {
    fn play(&mut self, cue: SoundCue) {
        if self.tx.send(cue).is_err() {
            warn!(%cue, "Audio thread has stopped");
        }
    }
}
