//! Single move invariant: consecutive boards differ by exactly one mark.

use super::super::{Board, Game, Square, rules};
use super::Invariant;

/// Invariant: each history entry adds exactly one mark to its predecessor.
///
/// The changed square goes from empty to the mark whose turn it was on the
/// previous board, and nothing else changes. A won board has no successor.
pub struct SingleMovePerStepInvariant;

impl SingleMovePerStepInvariant {
    fn is_single_move(before: &Board, after: &Board) -> bool {
        if rules::check_winner(before).is_some() {
            return false;
        }
        let expected = Square::Occupied(rules::next_mark(before));
        let mut changed = before
            .squares()
            .iter()
            .zip(after.squares())
            .filter(|(b, a)| b != a);

        match (changed.next(), changed.next()) {
            (Some((b, a)), None) => b.is_empty() && *a == expected,
            _ => false,
        }
    }
}

impl Invariant<Game> for SingleMovePerStepInvariant {
    fn holds(game: &Game) -> bool {
        game.history
            .windows(2)
            .all(|pair| Self::is_single_move(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each history entry places exactly one mark for the player to move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    fn game_with(history: Vec<Board>) -> Game {
        Game {
            history,
            current_step: 0,
        }
    }

    #[test]
    fn test_played_game_holds() {
        let mut game = Game::new();
        for index in [0, 4, 8, 2] {
            game.select_square(index);
        }
        assert!(SingleMovePerStepInvariant::holds(&game));
    }

    #[test]
    fn test_skipped_step_violates() {
        let first = Board::new();
        let two_marks = first
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::Center, Mark::O);
        assert!(!SingleMovePerStepInvariant::holds(&game_with(vec![
            first, two_marks
        ])));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let first = Board::new();
        let o_first = first.with_mark(Position::Center, Mark::O);
        assert!(!SingleMovePerStepInvariant::holds(&game_with(vec![
            first, o_first
        ])));
    }

    #[test]
    fn test_overwrite_violates() {
        let first = Board::new().with_mark(Position::Center, Mark::X);
        let overwritten = Board::new().with_mark(Position::Center, Mark::O);
        assert!(!SingleMovePerStepInvariant::holds(&game_with(vec![
            Board::new(),
            first,
            overwritten
        ])));
    }

    #[test]
    fn test_move_after_win_violates() {
        // X takes the top row at step 5, then O keeps playing.
        let mut history = vec![Board::new()];
        for (index, mark) in [(0, Mark::X), (3, Mark::O), (1, Mark::X), (4, Mark::O), (2, Mark::X)] {
            let pos = Position::from_index(index).unwrap();
            history.push(history.last().unwrap().with_mark(pos, mark));
        }
        let won = game_with(history.clone());
        assert!(SingleMovePerStepInvariant::holds(&won));

        history.push(
            history
                .last()
                .unwrap()
                .with_mark(Position::MiddleRight, Mark::O),
        );
        assert!(!SingleMovePerStepInvariant::holds(&game_with(history)));
    }

    #[test]
    fn test_repeated_board_violates() {
        assert!(!SingleMovePerStepInvariant::holds(&game_with(vec![
            Board::new(),
            Board::new()
        ])));
    }
}
