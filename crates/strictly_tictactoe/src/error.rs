//! Errors surfaced by the game engine.

use super::Position;

/// Error returned when navigating the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The requested step does not exist in the history.
    #[display("Step {step} is out of range (history has {len} entries)")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of entries in the history.
        len: usize,
    },
}

impl std::error::Error for HistoryError {}

/// Error returned when a saved snapshot cannot be turned back into a game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SnapshotError {
    /// One or more invariants do not hold for the restored state.
    #[display("Snapshot rejected: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for SnapshotError {}

/// Why a square selection left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoredMove {
    /// The game already has a winner.
    #[display("Game is already over")]
    GameOver,
    /// The square is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    SquareOccupied(Position),
    /// The index does not name a square.
    #[display("Index {} is off the board", _0)]
    OffBoard(usize),
}
