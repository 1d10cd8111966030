//! Win detection logic for tic-tac-toe.

use crate::line::Line;
use crate::types::{Board, Player};
use tracing::instrument;

/// Finds the first completed line in scan order.
///
/// Returns the owning player and the line, or `None` if no line has
/// three identical marks.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    Line::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.cells();
        let player = board.get(a).mark()?;
        (board.get(b).mark() == Some(player) && board.get(c).mark() == Some(player))
            .then_some((player, line))
    })
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}
