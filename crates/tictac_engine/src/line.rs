//! The eight winning lines.

use crate::types::Coord;
use serde::{Deserialize, Serialize};

/// An ordered triple of coordinates that wins when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Coord; 3]);

impl Line {
    /// All 8 lines in scan order: rows top to bottom, columns left to
    /// right, then the main and anti diagonals.
    pub const ALL: [Line; 8] = [
        // Rows
        Line([Coord::at(0, 0), Coord::at(0, 1), Coord::at(0, 2)]),
        Line([Coord::at(1, 0), Coord::at(1, 1), Coord::at(1, 2)]),
        Line([Coord::at(2, 0), Coord::at(2, 1), Coord::at(2, 2)]),
        // Columns
        Line([Coord::at(0, 0), Coord::at(1, 0), Coord::at(2, 0)]),
        Line([Coord::at(0, 1), Coord::at(1, 1), Coord::at(2, 1)]),
        Line([Coord::at(0, 2), Coord::at(1, 2), Coord::at(2, 2)]),
        // Diagonals
        Line([Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)]),
        Line([Coord::at(0, 2), Coord::at(1, 1), Coord::at(2, 0)]),
    ];

    /// The three coordinates of this line, in order.
    pub fn cells(&self) -> [Coord; 3] {
        self.0
    }

    /// Checks whether `coord` lies on this line.
    pub fn contains(&self, coord: Coord) -> bool {
        self.0.contains(&coord)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a}-{b}-{c}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lines_are_distinct() {
        let unique: HashSet<_> = Line::ALL.iter().collect();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn test_center_is_on_four_lines() {
        let center = Coord::at(1, 1);
        let count = Line::ALL.iter().filter(|l| l.contains(center)).count();
        assert_eq!(count, 4);
    }

    #[test]
    fn test_display() {
        assert_eq!(Line::ALL[7].to_string(), "(0, 2)-(1, 1)-(2, 0)");
    }
}
