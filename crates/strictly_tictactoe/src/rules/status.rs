//! Three-way game status.

use super::super::{Board, Mark};
use super::{check_winner, is_full, next_mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the game, derived from a single board.
///
/// Display text matches what a front-end shows above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing; `next` places the next mark.
    #[display("Next player: {next}")]
    InProgress {
        /// Mark to move.
        next: Mark,
    },
    /// Game ended in a win.
    #[display("Winner: {_0}")]
    Won(Mark),
    /// Board is full with no winner.
    #[display("Scratch: Cat's game")]
    Draw,
}

impl GameStatus {
    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

/// Classifies a board: a winner beats a full board, a full board beats
/// the next turn.
#[instrument]
pub fn calculate_status(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress {
            next: next_mark(board),
        }
    }
}
