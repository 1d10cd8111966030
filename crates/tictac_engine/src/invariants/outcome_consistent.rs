//! Outcome consistency invariant: the stored outcome matches the board.

use super::Invariant;
use crate::GameState;
use crate::rules::evaluate_outcome;

/// Invariant: `outcome == evaluate_outcome(board)`.
///
/// Covers the frozen-board rule indirectly: a won or drawn board can only
/// stay consistent if nothing else is written to it.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        *game.outcome() == evaluate_outcome(game.board())
    }

    fn description() -> &'static str {
        "Stored outcome matches the board"
    }
}
