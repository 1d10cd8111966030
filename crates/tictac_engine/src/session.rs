//! Session-level scorekeeping across board resets.

use crate::error::MoveError;
use crate::game::{GameState, new_game};
use crate::outcome::Outcome;
use crate::types::{Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Win counts for a session. Player 1 is X, player 2 is O.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    player1_wins: u32,
    player2_wins: u32,
}

impl Score {
    /// Creates a zeroed score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins for player 1 (X).
    pub fn player1_wins(&self) -> u32 {
        self.player1_wins
    }

    /// Wins for player 2 (O).
    pub fn player2_wins(&self) -> u32 {
        self.player2_wins
    }

    /// Wins for the given player.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.player1_wins,
            Player::O => self.player2_wins,
        }
    }

    /// Credits the winner of `outcome`. Returns whether anything changed.
    ///
    /// Draws and unfinished games leave the score alone.
    pub fn record(&mut self, outcome: &Outcome) -> bool {
        match outcome.winner() {
            Some(Player::X) => self.player1_wins += 1,
            Some(Player::O) => self.player2_wins += 1,
            None => return false,
        }
        true
    }
}

/// What happened on a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Who placed the mark.
    pub player: Player,
    /// Where the mark went.
    pub coord: Coord,
    /// Outcome after the move.
    pub outcome: Outcome,
}

impl MoveReport {
    /// True if this move ended the game.
    pub fn ended_game(&self) -> bool {
        self.outcome.is_terminal()
    }
}

/// A current game plus the score that outlives it.
///
/// This is the caller-side owner of [`Score`]: the engine only reports
/// outcomes, and the session credits each win exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    game: GameState,
    score: Score,
}

impl Session {
    /// Starts a session with a fresh game and a 0/0 score.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Accumulated score.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Plays the current player's mark at (`row`, `col`).
    ///
    /// On error the game and score are unchanged.
    #[instrument(skip(self))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<MoveReport, MoveError> {
        let player = self.game.current_player();
        let next = self.game.apply_move(row, col)?;
        let coord = Coord::new(row, col)?;
        let outcome = *next.outcome();

        let was_in_progress = !self.game.is_terminal();
        self.game = next;

        if was_in_progress && self.score.record(&outcome) {
            info!(
                %player,
                player1_wins = self.score.player1_wins,
                player2_wins = self.score.player2_wins,
                "Win recorded"
            );
        }

        Ok(MoveReport {
            player,
            coord,
            outcome,
        })
    }

    /// Replaces the game with a fresh one. The score is kept.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) {
        self.game = new_game();
    }

    /// Zeroes the score. The current game is kept.
    #[instrument(skip(self))]
    pub fn reset_score(&mut self) {
        self.score = Score::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_ignores_draw_and_in_progress() {
        let mut score = Score::new();
        assert!(!score.record(&Outcome::Draw));
        assert!(!score.record(&Outcome::InProgress));
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_failed_move_changes_nothing() {
        let mut session = Session::new();
        session.play(1, 1).expect("legal move");
        let before = session.clone();

        assert_eq!(
            session.play(1, 1),
            Err(MoveError::CellOccupied(Coord::at(1, 1)))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_report_describes_the_move() {
        let mut session = Session::new();
        let report = session.play(2, 0).expect("legal move");
        assert_eq!(report.player, Player::X);
        assert_eq!(report.coord, Coord::at(2, 0));
        assert_eq!(report.outcome, Outcome::InProgress);
        assert!(!report.ended_game());
    }
}
