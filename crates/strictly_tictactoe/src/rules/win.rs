//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position};
use tracing::instrument;

/// The 8 winning lines in scan order: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line (in [`LINES`] order) held entirely by one mark,
/// together with that mark.
#[instrument]
pub fn winning_line(board: &Board) -> Option<([Position; 3], Mark)> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(a).mark()?;
        let held = board.get(b).mark() == Some(mark) && board.get(c).mark() == Some(mark);
        held.then_some(([a, b, c], mark))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if one mark has three in a row, `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(_, mark)| mark)
}
