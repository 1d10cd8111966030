//! Alternating turn invariant: X, O, X, O, ... starting with X.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: the player on turn agrees with the marks on the board.
///
/// With equal mark counts X is to move; with one extra X, O is to move.
/// Once the game is over `current_player` is whoever moved last, which is
/// the opposite of those rules.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);

        let next_to_move = if x == o {
            Player::X
        } else if x == o + 1 {
            Player::O
        } else {
            return false;
        };

        let expected = if game.is_terminal() {
            next_to_move.opponent()
        } else {
            next_to_move
        };
        game.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
