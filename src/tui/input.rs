//! Keyboard mapping for the board cursor.

use crossterm::event::KeyCode;
use tictac_engine::{BOARD_SIDE, Coord};

/// Moves the cursor one cell in the arrow's direction, stopping at edges.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(BOARD_SIDE - 1), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(BOARD_SIDE - 1)),
        _ => return cursor,
    };
    Coord::new(row, col).unwrap_or(cursor)
}

/// Maps keys `1`..`9` to cells in reading order.
pub fn digit_to_coord(c: char) -> Option<Coord> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Coord::from_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).expect("in bounds")
    }

    #[test]
    fn test_cursor_moves_and_clamps() {
        assert_eq!(move_cursor(at(1, 1), KeyCode::Up), at(0, 1));
        assert_eq!(move_cursor(at(1, 1), KeyCode::Right), at(1, 2));
        assert_eq!(move_cursor(at(0, 0), KeyCode::Up), at(0, 0));
        assert_eq!(move_cursor(at(2, 2), KeyCode::Down), at(2, 2));
        assert_eq!(move_cursor(at(2, 2), KeyCode::Char('x')), at(2, 2));
    }

    #[test]
    fn test_digits_map_in_reading_order() {
        assert_eq!(digit_to_coord('1'), Some(at(0, 0)));
        assert_eq!(digit_to_coord('5'), Some(at(1, 1)));
        assert_eq!(digit_to_coord('9'), Some(at(2, 2)));
        assert_eq!(digit_to_coord('0'), None);
        assert_eq!(digit_to_coord('a'), None);
    }
}
