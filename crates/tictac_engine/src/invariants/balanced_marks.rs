//! Balanced marks invariant: X never trails O and never leads by two.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: `count(X) - count(O)` is 0 or 1.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(game: &GameState) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}
