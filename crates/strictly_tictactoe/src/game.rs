//! Time-travel game engine.
//!
//! The engine keeps every board the game has passed through plus a pointer
//! to the one being viewed. Jumping moves the pointer only; the next move
//! made from a past step discards every later entry before appending.

use super::error::{HistoryError, IgnoredMove};
use super::invariants::{GameInvariants, InvariantSet};
use super::moves::Moves;
use super::position::Position;
use super::rules::{self, GameStatus};
use super::types::{Board, Mark};
use tracing::{debug, info, instrument, warn};

/// Result of selecting a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A mark was placed and a new history entry appended.
    Applied {
        /// Where the mark went.
        position: Position,
        /// The mark placed.
        mark: Mark,
    },
    /// Nothing changed.
    Ignored(IgnoredMove),
}

impl MoveOutcome {
    /// Returns true if the selection changed the game.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// Tic-tac-toe game with a branching move history.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    pub(crate) history: Vec<Board>,
    pub(crate) current_step: usize,
}

impl Game {
    /// Creates a new game: a single empty board at step 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_step: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Operations
    // ─────────────────────────────────────────────────────────────

    /// Places the next mark at `index` (0-8, row-major).
    ///
    /// Selecting a square after the game is won, an occupied square, or an
    /// index off the board is a no-op reported as [`MoveOutcome::Ignored`].
    /// Otherwise any history after the current step is dropped and the new
    /// board becomes the current step.
    #[instrument(skip(self), fields(current_step = self.current_step))]
    pub fn select_square(&mut self, index: usize) -> MoveOutcome {
        let Some(position) = Position::from_index(index) else {
            warn!(index, "Ignoring selection off the board");
            return MoveOutcome::Ignored(IgnoredMove::OffBoard(index));
        };

        let board = *self.current_board();
        if let Some(winner) = rules::check_winner(&board) {
            debug!(%winner, "Ignoring selection on a finished game");
            return MoveOutcome::Ignored(IgnoredMove::GameOver);
        }
        if !board.is_empty(position) {
            debug!(%position, "Ignoring selection of an occupied square");
            return MoveOutcome::Ignored(IgnoredMove::SquareOccupied(position));
        }

        let mark = rules::next_mark(&board);
        let discarded = self.history.len() - (self.current_step + 1);
        self.history.truncate(self.current_step + 1);
        self.history.push(board.with_mark(position, mark));
        self.current_step = self.history.len() - 1;
        self.debug_check_invariants();

        info!(
            %position,
            %mark,
            step = self.current_step,
            discarded,
            "Move applied"
        );
        MoveOutcome::Applied { position, mark }
    }

    /// Makes `step` the current step without touching the history.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::StepOutOfRange`] if `step` is not a valid
    /// history index. The step is never clamped.
    #[instrument(skip(self), fields(current_step = self.current_step))]
    pub fn jump_to_step(&mut self, step: usize) -> Result<(), HistoryError> {
        let len = self.history.len();
        if step >= len {
            warn!(step, len, "Rejecting jump outside the history");
            return Err(HistoryError::StepOutOfRange { step, len });
        }
        self.current_step = step;
        debug!(step, "Jumped to step");
        Ok(())
    }

    /// Resets to a single empty board at step 0.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.history = vec![Board::new()];
        self.current_step = 0;
        info!("Game restarted");
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries (all derived from the current board)
    // ─────────────────────────────────────────────────────────────

    /// Every board the game has passed through, starting with the empty one.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the board being viewed.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Number of history entries (always at least 1).
    pub fn step_count(&self) -> usize {
        self.history.len()
    }

    /// The board at the current step.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_step]
    }

    /// Mark that moves next on the current board.
    pub fn next_mark(&self) -> Mark {
        rules::next_mark(self.current_board())
    }

    /// Winner on the current board, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(self.current_board())
    }

    /// Line that won the game on the current board, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(self.current_board()).map(|(line, _)| line)
    }

    /// Status of the current board.
    pub fn status(&self) -> GameStatus {
        rules::calculate_status(self.current_board())
    }

    /// Returns true if the current board is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Empty squares on the current board, or none once the game is won.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.winner().is_some() {
            Vec::new()
        } else {
            Position::valid_moves(self.current_board())
        }
    }

    /// The move list, one label per history entry.
    pub fn moves(&self) -> Moves {
        Moves::new(self.history.len(), self.current_step)
    }

    fn debug_check_invariants(&self) {
        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "Game invariants violated: {:?}",
            GameInvariants::check_all(self)
        );
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play(game: &mut Game, indices: &[usize]) {
        for &index in indices {
            assert!(
                game.select_square(index).is_applied(),
                "move {index} should apply"
            );
        }
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.history(), &[Board::new()]);
        assert_eq!(game.current_step(), 0);
        assert_eq!(game.next_mark(), Mark::X);
        assert_eq!(game.status(), GameStatus::InProgress { next: Mark::X });
    }

    #[test]
    fn test_select_square_appends_snapshot() {
        let mut game = Game::new();
        let outcome = game.select_square(4);
        assert_eq!(
            outcome,
            MoveOutcome::Applied {
                position: Position::Center,
                mark: Mark::X
            }
        );
        assert_eq!(game.step_count(), 2);
        assert_eq!(game.current_step(), 1);
        assert_eq!(
            game.current_board().get(Position::Center),
            Square::Occupied(Mark::X)
        );
        // The initial board is never mutated in place.
        assert_eq!(game.history()[0], Board::new());
    }

    #[test]
    fn test_occupied_square_is_noop() {
        let mut game = Game::new();
        play(&mut game, &[4]);
        let before = game.clone();
        assert_eq!(
            game.select_square(4),
            MoveOutcome::Ignored(IgnoredMove::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_off_board_index_is_noop() {
        let mut game = Game::new();
        let before = game.clone();
        assert_eq!(
            game.select_square(9),
            MoveOutcome::Ignored(IgnoredMove::OffBoard(9))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_jump_rejects_out_of_range() {
        let mut game = Game::new();
        play(&mut game, &[0, 1]);
        assert_eq!(
            game.jump_to_step(3),
            Err(HistoryError::StepOutOfRange { step: 3, len: 3 })
        );
        assert_eq!(game.current_step(), 2);
    }

    #[test]
    fn test_jump_back_derives_from_past_board() {
        let mut game = Game::new();
        play(&mut game, &[0, 1, 2]);
        game.jump_to_step(1).unwrap();
        assert_eq!(game.next_mark(), Mark::O);
        assert_eq!(game.step_count(), 4);
        assert_eq!(game.current_board().occupied_count(), 1);
    }

    #[test]
    fn test_move_from_past_truncates_future() {
        let mut game = Game::new();
        play(&mut game, &[0, 1, 2, 3]);
        game.jump_to_step(1).unwrap();
        play(&mut game, &[8]);
        assert_eq!(game.step_count(), 3);
        assert_eq!(game.current_step(), 2);
        assert_eq!(
            game.current_board().get(Position::BottomRight),
            Square::Occupied(Mark::O)
        );
        assert!(game.current_board().is_empty(Position::TopCenter));
    }

    #[test]
    fn test_win_clears_valid_moves() {
        let mut game = Game::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        assert_eq!(game.winner(), Some(Mark::X));
        assert_eq!(
            game.winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        assert!(game.valid_moves().is_empty());
        assert!(game.is_over());
    }

    #[test]
    fn test_restart() {
        let mut game = Game::new();
        play(&mut game, &[0, 1, 2]);
        game.jump_to_step(1).unwrap();
        game.restart();
        assert_eq!(game, Game::new());
    }
}
