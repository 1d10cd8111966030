//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold for every reachable
//! [`GameState`](crate::GameState). They are testable independently and are
//! checked after each move in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        check_one::<S, I4>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod alternating_turn;
pub mod balanced_marks;
pub mod outcome_consistent;
pub mod single_winner;

pub use alternating_turn::AlternatingTurnInvariant;
pub use balanced_marks::BalancedMarksInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;
pub use single_winner::SingleWinnerInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    BalancedMarksInvariant,
    AlternatingTurnInvariant,
    OutcomeConsistentInvariant,
    SingleWinnerInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, new_game};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(EngineInvariants::check_all(&new_game()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_through_a_full_game() {
        // Ends in a draw after nine moves.
        let moves = [
            (0, 0),
            (1, 1),
            (2, 2),
            (0, 1),
            (2, 1),
            (2, 0),
            (0, 2),
            (1, 2),
            (1, 0),
        ];
        let mut game = new_game();
        for (r, c) in moves {
            game = game.apply_move(r, c).expect("legal move");
            assert!(EngineInvariants::check_all(&game).is_ok());
        }
        assert!(game.outcome().is_draw());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = new_game();
        game.board = "OO. / ... / ...".parse().expect("valid board");

        let violations = EngineInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, BalancedMarksInvariant::description());
        assert_eq!(violations[1].description, AlternatingTurnInvariant::description());
    }

    #[test]
    fn test_three_invariants_as_set() {
        type ThreeInvariants = (
            BalancedMarksInvariant,
            AlternatingTurnInvariant,
            OutcomeConsistentInvariant,
        );
        assert!(ThreeInvariants::check_all(&new_game()).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (BalancedMarksInvariant, OutcomeConsistentInvariant);
        let game = new_game().apply_move(0, 0).expect("legal move");
        assert!(TwoInvariants::check_all(&game).is_ok());
        assert_eq!(game.current_player(), Player::O);
    }
}
