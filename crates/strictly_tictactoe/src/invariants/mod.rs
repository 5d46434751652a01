//! First-class invariants for the time-travel engine.
//!
//! Invariants are logical properties that must hold for every reachable
//! game. The engine checks them in debug builds after each move, and
//! restored snapshots are validated against them before use.

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
/// Implementations are provided for tuples of two and three invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod single_move;
pub mod starts_empty;
pub mod step_in_range;

pub use single_move::SingleMovePerStepInvariant;
pub use starts_empty::StartsEmptyInvariant;
pub use step_in_range::StepInRangeInvariant;

/// All engine invariants as a composable set.
pub type GameInvariants = (
    StartsEmptyInvariant,
    SingleMovePerStepInvariant,
    StepInRangeInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Game, Mark, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&Game::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_time_travel() {
        let mut game = Game::new();
        for index in [4, 0, 1] {
            game.select_square(index);
        }
        game.jump_to_step(1).unwrap();
        game.select_square(8);
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let game = Game {
            history: vec![Board::new().with_mark(Position::Center, Mark::X)],
            current_step: 5,
        };
        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (StartsEmptyInvariant, StepInRangeInvariant);
        assert!(TwoInvariants::check_all(&Game::new()).is_ok());
    }
}
