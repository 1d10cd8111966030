//! Tests for sound cues and the flicker schedule.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tictac_duel::engine::{Line, Session};
use tictac_duel::feedback::{Feedback, FlickerSchedule, SoundCue, SoundSink, TerminalBell};

#[derive(Clone, Default)]
struct RecordingSink(Arc<Mutex<Vec<SoundCue>>>);

impl RecordingSink {
    fn played(&self) -> Vec<SoundCue> {
        self.0.lock().expect("lock").clone()
    }
}

impl SoundSink for RecordingSink {
    fn play(&mut self, cue: SoundCue) {
        self.0.lock().expect("lock").push(cue);
    }
}

fn play_all(session: &mut Session, moves: &[(usize, usize)]) -> Vec<Vec<SoundCue>> {
    moves
        .iter()
        .map(|&(r, c)| Feedback::cues_for(&session.play(r, c).expect("legal move")))
        .collect()
}

#[test]
fn test_move_cues_follow_mover_and_outcome() {
    let mut session = Session::new();
    let cues = play_all(&mut session, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(cues[0], vec![SoundCue::MoveX]);
    assert_eq!(cues[1], vec![SoundCue::MoveO]);
    assert_eq!(cues[4], vec![SoundCue::MoveX, SoundCue::Win]);
}

#[test]
fn test_draw_cue() {
    let mut session = Session::new();
    let moves = [
        (0, 0),
        (1, 1),
        (2, 2),
        (0, 1),
        (2, 1),
        (2, 0),
        (0, 2),
        (1, 2),
        (1, 0),
    ];
    let cues = play_all(&mut session, &moves);
    assert_eq!(cues[8], vec![SoundCue::MoveX, SoundCue::Draw]);
}

#[test]
fn test_feedback_honours_sound_setting() {
    let sink = RecordingSink::default();
    let mut feedback = Feedback::new(Box::new(sink.clone()));
    let mut session = Session::new();

    let report = session.play(1, 1).expect("legal");
    feedback.on_move(&report, false);
    assert!(sink.played().is_empty());

    feedback.on_move(&report, true);
    assert_eq!(sink.played(), vec![SoundCue::MoveX]);
}

#[test]
fn test_players_and_endings_have_their_own_tones() {
    let x = SoundCue::MoveX.tones();
    let o = SoundCue::MoveO.tones();
    assert_ne!(x[0].frequency_hz, o[0].frequency_hz);
    assert_eq!(SoundCue::Win.tones().len(), 3);
    assert_eq!(SoundCue::Draw.tones().len(), 2);
}

#[test]
fn test_terminal_bell_rings_per_tone() {
    let mut bell = TerminalBell::new(Vec::new());
    let mut session = Session::new();
    for &(r, c) in &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        let report = session.play(r, c).expect("legal move");
        for cue in Feedback::cues_for(&report) {
            bell.play(cue);
        }
    }
    // Five single-tone moves, then the three-tone win.
    assert_eq!(bell.into_inner().len(), 8);
}

#[test]
fn test_flicker_alternates_then_stays_visible() {
    let start = Instant::now();
    let schedule = FlickerSchedule::new(4, Duration::from_millis(100));
    let flicker = schedule.start(Line::ALL[0], start);
    let at = |ms: u64| start + Duration::from_millis(ms);

    assert!(!flicker.is_visible(at(0)));
    assert!(flicker.is_visible(at(100)));
    assert!(!flicker.is_visible(at(250)));
    assert!(flicker.is_visible(at(399)));
    assert!(!flicker.is_finished(at(399)));

    assert!(flicker.is_finished(at(400)));
    assert!(flicker.is_visible(at(400)));
    assert!(flicker.is_visible(at(10_000)));
    assert_eq!(flicker.line(), Line::ALL[0]);
}

#[test]
fn test_flicker_before_start_is_hidden() {
    let now = Instant::now();
    let flicker = FlickerSchedule::default().start(Line::ALL[7], now + Duration::from_secs(1));
    assert!(!flicker.is_visible(now));
}
