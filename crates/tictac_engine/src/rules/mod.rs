//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. They know nothing about whose turn it
//! is, so contracts and invariants can reuse them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line};

use crate::outcome::Outcome;
use crate::types::Board;
use tracing::{instrument, trace};

/// Classifies a board.
///
/// Lines are scanned in [`Line::ALL`](crate::Line::ALL) order and the first
/// completed one wins. Otherwise a full board is a draw.
#[instrument(skip(board))]
pub fn evaluate_outcome(board: &Board) -> Outcome {
    let outcome = match winning_line(board) {
        Some((player, line)) => Outcome::Win { player, line },
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    };
    trace!(%outcome, "Evaluated board");
    outcome
}
