//! Whose turn it is.

use super::super::{Board, Mark};
use tracing::instrument;

/// X moves on an even count of occupied squares, O on an odd count.
#[instrument]
pub fn next_mark(board: &Board) -> Mark {
    if board.occupied_count() % 2 == 0 {
        Mark::X
    } else {
        Mark::O
    }
}
