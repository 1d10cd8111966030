//! Contract-based validation for moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}. Preconditions
//! reject caller mistakes with a [`MoveError`]; postconditions catch engine
//! bugs and are only evaluated in debug builds.

use crate::error::MoveError;
use crate::game::GameState;
use crate::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use crate::types::{Cell, Coord};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not been won or drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves on a finished game.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.is_terminal() {
            Err(MoveError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto a marked cell.
    #[instrument(skip(game))]
    pub fn check(coord: Coord, game: &GameState) -> Result<(), MoveError> {
        if game.board().is_empty(coord) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(coord))
        }
    }
}

/// Composite precondition. Bounds are already guaranteed by [`Coord`].
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(coord: Coord, game: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        CellIsEmpty::check(coord, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition postcondition
// ─────────────────────────────────────────────────────────────

/// Postcondition: exactly one empty cell gained the mover's mark and no
/// other cell changed.
pub struct SingleMarkPlaced;

impl SingleMarkPlaced {
    /// Compares two boards cell by cell.
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let mover = before.current_player();
        let mut placed = 0;
        for (old, new) in before.board().cells().iter().zip(after.board().cells()) {
            match (old, new) {
                (a, b) if a == b => {}
                (Cell::Empty, Cell::Mark(p)) if *p == mover => placed += 1,
                _ => return false,
            }
        }
        placed == 1
    }

    /// Human-readable description.
    pub fn description() -> &'static str {
        "Exactly one empty cell receives the mover's mark"
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions:
/// - Game is still in progress
/// - Target cell is empty
///
/// Postconditions:
/// - One mark was added, by the player whose turn it was
/// - All [`EngineInvariants`] hold on the new state
pub struct MoveContract;

impl Contract<GameState, Coord> for MoveContract {
    fn pre(game: &GameState, coord: &Coord) -> Result<(), MoveError> {
        LegalMove::check(*coord, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match EngineInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(v) => v,
        };
        if !SingleMarkPlaced::holds(before, after) {
            violations.push(InvariantViolation::new(SingleMarkPlaced::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(?violations, "Move postcondition failed");
            Err(violations)
        }
    }
}
