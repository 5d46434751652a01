//! Current step invariant.

use super::super::Game;
use super::Invariant;

/// Invariant: the current step indexes an existing history entry.
pub struct StepInRangeInvariant;

impl Invariant<Game> for StepInRangeInvariant {
    fn holds(game: &Game) -> bool {
        game.current_step < game.history.len()
    }

    fn description() -> &'static str {
        "Current step lies within the history"
    }
}
