//! Core domain types for tic-tac-toe.

use crate::error::{MoveError, ParseBoardError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Side of the board (3 rows, 3 columns).
pub const BOARD_SIDE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// Player in the game.
///
/// Identity is positional: `X` always moves first, `O` second. How the
/// marks are drawn on screen is up to the front end.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Mark(Player),
}

impl Cell {
    /// Returns the player whose mark is in this cell, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Mark(player) => Some(player),
        }
    }

    /// Checks whether the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A validated board coordinate.
///
/// Both `row` and `col` are always in `0..3`; the only public constructor
/// is [`Coord::new`], which rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// All 9 coordinates in row-major order.
    pub const ALL: [Coord; CELL_COUNT] = [
        Coord::at(0, 0),
        Coord::at(0, 1),
        Coord::at(0, 2),
        Coord::at(1, 0),
        Coord::at(1, 1),
        Coord::at(1, 2),
        Coord::at(2, 0),
        Coord::at(2, 1),
        Coord::at(2, 2),
    ];

    /// Creates a coordinate, rejecting anything off the board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if `row` or `col` is not in `0..3`.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= BOARD_SIDE || col >= BOARD_SIDE {
            return Err(MoveError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a coordinate from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this coordinate.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column of this coordinate.
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * BOARD_SIDE + self.col
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from cells in row-major order.
    ///
    /// Any arrangement is accepted, so this is meant for evaluating
    /// positions, not for constructing playable games.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// Places a mark, overwriting whatever is there.
    pub(crate) fn place(&mut self, coord: Coord, player: Player) {
        self.cells[coord.index()] = Cell::Mark(player);
    }

    /// Checks if the cell at `coord` is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord).is_empty()
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Iterates over the empty coordinates in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::ALL.into_iter().filter(|c| self.is_empty(*c))
    }

    /// Counts the marks a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| c.mark() == Some(player))
            .count()
    }

    /// Formats the board as a plain-text grid.
    ///
    /// Empty cells are shown as `.`, so the output parses back with
    /// [`Board::from_str`].
    pub fn render(&self) -> String {
        let mut result = String::with_capacity(CELL_COUNT + 2);
        for (idx, cell) in self.cells.iter().enumerate() {
            if idx > 0 && idx % BOARD_SIDE == 0 {
                result.push('\n');
            }
            result.push(match cell {
                Cell::Empty => '.',
                Cell::Mark(Player::X) => 'X',
                Cell::Mark(Player::O) => 'O',
            });
        }
        result
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses `X`, `O` and `.` (or `_`) in row-major order, ignoring
    /// whitespace and `/` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut count = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '/') {
            let cell = match ch.to_ascii_uppercase() {
                'X' => Cell::Mark(Player::X),
                'O' => Cell::Mark(Player::O),
                '.' | '_' => Cell::Empty,
                other => return Err(ParseBoardError::InvalidSymbol(other)),
            };
            if count == CELL_COUNT {
                return Err(ParseBoardError::WrongLength(count + 1));
            }
            cells[count] = cell;
            count += 1;
        }
        if count != CELL_COUNT {
            return Err(ParseBoardError::WrongLength(count));
        }
        Ok(Self { cells })
    }
}
