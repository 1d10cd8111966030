//! Scorekeeping across games in a session.

use tictac_engine::{MoveError, Outcome, Player, Score, Session};

fn play_all(session: &mut Session, moves: &[(usize, usize)]) {
    for &(r, c) in moves {
        session
            .play(r, c)
            .unwrap_or_else(|e| panic!("move ({r}, {c}) rejected: {e}"));
    }
}

const X_WINS_TOP_ROW: [(usize, usize); 5] = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)];
const O_WINS_MIDDLE_COLUMN: [(usize, usize); 6] = [(0, 0), (0, 1), (2, 2), (1, 1), (2, 0), (2, 1)];
const DRAW: [(usize, usize); 9] = [
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

#[test]
fn test_win_increments_once() {
    let mut session = Session::new();
    play_all(&mut session, &X_WINS_TOP_ROW);
    assert_eq!(session.score().player1_wins(), 1);
    assert_eq!(session.score().player2_wins(), 0);

    // Further taps on a finished game do not credit again.
    assert_eq!(session.play(2, 2), Err(MoveError::GameAlreadyOver));
    assert_eq!(session.play(0, 0), Err(MoveError::GameAlreadyOver));
    assert_eq!(session.score().player1_wins(), 1);
}

#[test]
fn test_draw_never_scores() {
    let mut session = Session::new();
    play_all(&mut session, &DRAW);
    assert!(session.game().outcome().is_draw());
    assert_eq!(*session.score(), Score::new());
}

#[test]
fn test_score_survives_board_reset() {
    let mut session = Session::new();
    play_all(&mut session, &X_WINS_TOP_ROW);
    session.reset_board();
    assert!(!session.game().is_terminal());
    assert_eq!(session.game().current_player(), Player::X);

    play_all(&mut session, &O_WINS_MIDDLE_COLUMN);
    assert_eq!(session.game().outcome().winner(), Some(Player::O));

    session.reset_board();
    play_all(&mut session, &DRAW);

    assert_eq!(session.score().wins(Player::X), 1);
    assert_eq!(session.score().wins(Player::O), 1);
}

#[test]
fn test_reset_score_is_explicit() {
    let mut session = Session::new();
    play_all(&mut session, &X_WINS_TOP_ROW);
    session.reset_score();
    assert_eq!(*session.score(), Score::new());
    // The finished board is still there until the board is reset.
    assert!(session.game().is_terminal());
}

#[test]
fn test_winning_report() {
    let mut session = Session::new();
    play_all(&mut session, &X_WINS_TOP_ROW[..4]);
    let report = session.play(0, 2).expect("winning move");
    assert_eq!(report.player, Player::X);
    assert!(report.ended_game());
    assert!(matches!(report.outcome, Outcome::Win { player: Player::X, .. }));
}
