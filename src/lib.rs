//! Strictly Timetravel - persisted time-travel tic-tac-toe.
//!
//! Wraps the pure [`strictly_tictactoe`] engine with the pieces an owner
//! needs to keep a game across restarts.
//!
//! # Architecture
//!
//! - **Store**: the narrow [`KeyValueStore`] capability plus [`MemoryStore`]
//! - **Persisted game**: [`PersistedGame`] loads once, saves after each change
//! - **Config**: [`PersistenceConfig`] names the store keys (TOML + env)
//! - **Telemetry**: [`init_tracing`] for binaries and tests
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{MemoryStore, PersistedGame};
//!
//! let mut persisted = PersistedGame::load_default(MemoryStore::new());
//! persisted.select_square(4);
//!
//! let (_, store) = persisted.into_parts();
//! let reloaded = PersistedGame::load_default(store);
//! assert_eq!(reloaded.game().current_step(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod persisted;
mod store;
mod telemetry;

// Crate-level exports - Configuration
pub use config::{CURRENT_STEP_KEY_VAR, ConfigError, HISTORY_KEY_VAR, PersistenceConfig};

// Crate-level exports - Persistence
pub use persisted::PersistedGame;
pub use store::{KeyValueStore, MemoryStore, StoreError};

// Crate-level exports - Telemetry
pub use telemetry::init_tracing;

// Crate-level exports - Engine types
pub use strictly_tictactoe::{
    Board, Game, GameSnapshot, GameStatus, HistoryError, IgnoredMove, Mark, MoveLabel,
    MoveOutcome, Position, Square,
};
