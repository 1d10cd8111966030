//! Error types for the engine.

use crate::invariants::InvariantViolation;
use crate::types::Coord;
use serde::{Deserialize, Serialize};

/// Error returned when a move is rejected.
///
/// Every variant is a caller mistake. The state the move was applied to is
/// never modified, so callers can keep using it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveError {
    /// Row or column is outside `0..3`.
    #[display("Coordinate ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coord),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameAlreadyOver,
}

impl std::error::Error for MoveError {}

/// Error returned when parsing a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// A character other than `X`, `O`, `.` or `_` was found.
    #[display("Invalid board symbol {:?}", _0)]
    InvalidSymbol(char),

    /// The text did not describe exactly 9 cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for ParseBoardError {}

/// Error returned when a stored state could not have been reached by play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidStateError {
    violations: Vec<InvariantViolation>,
}

impl InvalidStateError {
    pub(crate) fn new(violations: Vec<InvariantViolation>) -> Self {
        Self { violations }
    }

    /// Invariants the state broke.
    pub fn violations(&self) -> &[InvariantViolation] {
        &self.violations
    }
}

impl std::fmt::Display for InvalidStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unreachable game state")?;
        for (i, violation) in self.violations.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{}{}", sep, violation.description)?;
        }
        Ok(())
    }
}

impl std::error::Error for InvalidStateError {}
