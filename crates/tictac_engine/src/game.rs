//! Game state and the single move transition.

use crate::contracts::{Contract, MoveContract};
use crate::error::{InvalidStateError, MoveError};
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::outcome::Outcome;
use crate::rules::evaluate_outcome;
use crate::types::{Board, Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete state of one game.
///
/// Values only come from [`new_game`] or [`GameState::apply_move`], so the
/// board, turn and outcome always agree with each other. Deserialized
/// values are checked against [`EngineInvariants`] and rejected if play
/// could not have produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) outcome: Outcome,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move, or the last mover once the game is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns true once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Places the current player's mark at (`row`, `col`) and returns the
    /// resulting state.
    ///
    /// `self` is left untouched whether the move succeeds or not. The turn
    /// passes to the opponent only while the game stays in progress; a
    /// winning or drawing move keeps the mover as `current_player`.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`MoveError::OutOfBounds`] if `row` or `col` is not in `0..3`
    /// - [`MoveError::GameAlreadyOver`] if the game is won or drawn
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&self, row: usize, col: usize) -> Result<GameState, MoveError> {
        let coord = Coord::new(row, col)?;
        MoveContract::pre(self, &coord)?;

        let mut board = self.board.clone();
        board.place(coord, self.current_player);
        let outcome = evaluate_outcome(&board);

        let current_player = if outcome.is_terminal() {
            self.current_player
        } else {
            self.current_player.opponent()
        };

        let next = GameState {
            board,
            current_player,
            outcome,
        };
        debug!(%coord, outcome = %next.outcome, "Move applied");

        #[cfg(debug_assertions)]
        if let Err(violations) = MoveContract::post(self, &next) {
            debug_assert!(false, "Move postcondition failed: {:?}", violations);
        }

        Ok(next)
    }
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    board: Board,
    current_player: Player,
    outcome: Outcome,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvalidStateError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = GameState {
            board: raw.board,
            current_player: raw.current_player,
            outcome: raw.outcome,
        };
        EngineInvariants::check_all(&state).map_err(InvalidStateError::new)?;
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the initial state: empty board, X to move, in progress.
pub fn new_game() -> GameState {
    GameState::new()
}

/// Applies a move to `state`. See [`GameState::apply_move`].
pub fn apply_move(state: &GameState, row: usize, col: usize) -> Result<GameState, MoveError> {
    state.apply_move(row, col)
}

/// True iff the game is won or drawn.
pub fn is_terminal(state: &GameState) -> bool {
    state.is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_state_with_missed_win_is_rejected() {
        let raw = RawGameState {
            board: "XXX / OO. / O..".parse().expect("valid board"),
            current_player: Player::X,
            outcome: Outcome::InProgress,
        };
        let err = GameState::try_from(raw).unwrap_err();
        assert_eq!(err.violations().len(), 1);
        assert_eq!(
            err.to_string(),
            "Unreachable game state: Stored outcome matches the board"
        );
    }

    #[test]
    fn test_new_game() {
        let game = new_game();
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.outcome(), &Outcome::InProgress);
        assert_eq!(game.board(), &Board::new());
        assert!(!is_terminal(&game));
    }

    #[test]
    fn test_move_flips_turn() {
        let game = new_game().apply_move(1, 1).expect("legal move");
        assert_eq!(game.current_player(), Player::O);
        assert_eq!(game.board().count(Player::X), 1);
    }

    #[test]
    fn test_out_of_bounds_checked_before_game_over() {
        let won = GameState {
            board: "XXX / OO. / ...".parse().expect("valid board"),
            current_player: Player::X,
            outcome: Outcome::Win {
                player: Player::X,
                line: crate::Line::ALL[0],
            },
        };
        assert_eq!(
            won.apply_move(5, 0),
            Err(MoveError::OutOfBounds { row: 5, col: 0 })
        );
        assert_eq!(won.apply_move(0, 0), Err(MoveError::GameAlreadyOver));
        assert_eq!(won.apply_move(2, 2), Err(MoveError::GameAlreadyOver));
    }

    #[test]
    fn test_winning_move_keeps_mover() {
        let game = [(0, 0), (1, 0), (0, 1), (1, 1)]
            .into_iter()
            .try_fold(new_game(), |g, (r, c)| g.apply_move(r, c))
            .expect("legal moves");
        let won = game.apply_move(0, 2).expect("winning move");
        assert_eq!(won.current_player(), Player::X);
        assert_eq!(won.outcome().winner(), Some(Player::X));
    }
}
