//! Starting board invariant: history begins with the empty board.

use super::super::{Board, Game};
use super::Invariant;

/// Invariant: history is non-empty and its first entry is the empty board.
pub struct StartsEmptyInvariant;

impl Invariant<Game> for StartsEmptyInvariant {
    fn holds(game: &Game) -> bool {
        game.history.first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(StartsEmptyInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_empty_history_violates() {
        let game = Game {
            history: Vec::new(),
            current_step: 0,
        };
        assert!(!StartsEmptyInvariant::holds(&game));
    }

    #[test]
    fn test_marked_first_board_violates() {
        let game = Game {
            history: vec![Board::new().with_mark(Position::TopLeft, Mark::X)],
            current_step: 0,
        };
        assert!(!StartsEmptyInvariant::holds(&game));
    }
}
