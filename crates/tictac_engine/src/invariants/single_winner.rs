//! Single winner invariant: only the player who moved last can hold a line.

use super::Invariant;
use crate::line::Line;
use crate::types::{Board, Cell, Player};
use crate::GameState;

/// Invariant: a won game was won by the last mover, and the loser never
/// completed a line.
///
/// Play stops at the first completed line, so a board where both players
/// hold a line, or where the winner is not `current_player`, is unreachable.
pub struct SingleWinnerInvariant;

fn has_line(board: &Board, player: Player) -> bool {
    Line::ALL.iter().any(|line| {
        line.cells()
            .iter()
            .all(|coord| board.get(*coord) == Cell::Mark(player))
    })
}

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(game: &GameState) -> bool {
        match game.outcome().winner() {
            Some(winner) => {
                winner == game.current_player() && !has_line(game.board(), winner.opponent())
            }
            None => true,
        }
    }

    fn description() -> &'static str {
        "Only the last mover holds a completed line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::evaluate_outcome;

    fn state(board: &str, current_player: Player) -> GameState {
        let board: Board = board.parse().expect("valid board");
        let outcome = evaluate_outcome(&board);
        GameState {
            board,
            current_player,
            outcome,
        }
    }

    #[test]
    fn test_holds_for_played_win() {
        let game = crate::new_game()
            .apply_move(0, 0)
            .and_then(|g| g.apply_move(1, 0))
            .and_then(|g| g.apply_move(0, 1))
            .and_then(|g| g.apply_move(1, 1))
            .and_then(|g| g.apply_move(0, 2))
            .expect("legal moves");
        assert!(SingleWinnerInvariant::holds(&game));
    }

    #[test]
    fn test_winner_must_have_moved_last() {
        // O holds the top row but X made the last (seventh) mark.
        assert!(!SingleWinnerInvariant::holds(&state("OOO / XX. / XX.", Player::X)));
    }

    #[test]
    fn test_both_players_with_lines_violates() {
        assert!(!SingleWinnerInvariant::holds(&state("XXX / OOO / X..", Player::X)));
    }
}
