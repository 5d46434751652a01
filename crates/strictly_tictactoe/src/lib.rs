//! Pure tic-tac-toe game logic with a time-travel move history.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Square`], [`Board`] and named [`Position`]s
//! - **Rules**: pure functions deriving winner, next mark and [`GameStatus`]
//! - **Engine**: [`Game`] keeps every board played and a pointer to the one
//!   being viewed; moves made from a past step discard the later entries
//! - **Invariants**: composable checks used in debug builds and on restore
//!
//! The engine performs no I/O. Owners persist a [`GameSnapshot`] after each
//! change if they want the game to survive a restart.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Game, GameStatus, Mark};
//!
//! let mut game = Game::new();
//! game.select_square(4);
//! assert_eq!(game.status(), GameStatus::InProgress { next: Mark::O });
//!
//! game.jump_to_step(0).unwrap();
//! assert_eq!(game.next_mark(), Mark::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
pub mod invariants;
mod moves;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use error::{HistoryError, IgnoredMove, SnapshotError};
pub use game::{Game, MoveOutcome};
pub use moves::{MoveLabel, Moves};
pub use position::Position;
pub use rules::GameStatus;
pub use snapshot::GameSnapshot;
pub use types::{Board, Mark, Square};
