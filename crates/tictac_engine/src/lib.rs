//! Pure tic-tac-toe engine.
//!
//! The engine is a state machine over a fixed 3x3 grid:
//!
//! - [`new_game`] builds the initial [`GameState`]
//! - [`GameState::apply_move`] is the only transition; it validates the
//!   move, places the mark, classifies the board and passes the turn
//! - [`evaluate_outcome`] classifies any [`Board`]
//!
//! Nothing here reads settings, plays sounds or renders. Front ends hold a
//! [`Session`], which also keeps the score across board resets.
//!
//! ```
//! use tictac_engine::{Outcome, Player, Session};
//!
//! let mut session = Session::new();
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     session.play(row, col)?;
//! }
//! assert_eq!(session.game().outcome().winner(), Some(Player::X));
//! assert_eq!(session.score().player1_wins(), 1);
//! # Ok::<(), tictac_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod error;
mod game;
mod invariants;
mod line;
mod outcome;
mod rules;
mod session;
mod types;

pub use contracts::{CellIsEmpty, Contract, GameNotOver, LegalMove, MoveContract, SingleMarkPlaced};
pub use error::{InvalidStateError, MoveError, ParseBoardError};
pub use game::{GameState, apply_move, is_terminal, new_game};
pub use invariants::{
    AlternatingTurnInvariant, BalancedMarksInvariant, EngineInvariants, Invariant, InvariantSet,
    InvariantViolation, OutcomeConsistentInvariant, SingleWinnerInvariant,
};
pub use line::Line;
pub use outcome::Outcome;
pub use rules::{check_winner, evaluate_outcome, is_draw, is_full, winning_line};
pub use session::{MoveReport, Score, Session};
pub use types::{BOARD_SIDE, Board, CELL_COUNT, Cell, Coord, Player};
