//! A game that loads itself from a store and saves after every change.

use crate::config::PersistenceConfig;
use crate::store::{KeyValueStore, StoreError};
use strictly_tictactoe::{Board, Game, GameSnapshot, HistoryError, MoveOutcome, SnapshotError};
use tracing::{debug, info, instrument, warn};

/// Why stored state could not be used.
#[derive(Debug, derive_more::Display)]
enum LoadError {
    /// The store itself failed.
    #[display("{}", _0)]
    Store(StoreError),
    /// Only one of the two keys is present.
    #[display("Only one of '{}' and '{}' is stored", _0, _1)]
    Partial(String, String),
    /// A stored value is not valid JSON of the expected shape.
    #[display("Failed to decode '{}': {}", _0, _1)]
    Decode(String, serde_json::Error),
    /// The decoded state breaks an engine invariant.
    #[display("{}", _0)]
    Snapshot(SnapshotError),
}

impl LoadError {
    /// Store failures leave the stored values alone; anything else means the
    /// values themselves are bad.
    fn is_corrupt_data(&self) -> bool {
        !matches!(self, LoadError::Store(_))
    }
}

/// Owner of a [`Game`] that keeps it in sync with a [`KeyValueStore`].
///
/// On load the history and current step are read from the store; missing
/// state starts a new game and corrupt state is deleted before starting a new
/// game. Every operation that changes the game writes both values back. A
/// failing store is logged and otherwise ignored: the game itself always
/// reflects the operation.
#[derive(Debug)]
pub struct PersistedGame<S> {
    game: Game,
    store: S,
    config: PersistenceConfig,
}

impl<S: KeyValueStore> PersistedGame<S> {
    /// Loads the game stored under the configured keys.
    #[instrument(skip(store, config), fields(history_key = %config.history_key()))]
    pub fn load(store: S, config: PersistenceConfig) -> Self {
        let mut persisted = Self {
            game: Game::new(),
            store,
            config,
        };

        match persisted.read_game() {
            Ok(Some(game)) => {
                info!(
                    steps = game.step_count(),
                    current_step = game.current_step(),
                    "Restored saved game"
                );
                persisted.game = game;
            }
            Ok(None) => debug!("No saved game, starting fresh"),
            Err(e) => {
                warn!(error = %e, "Ignoring saved game");
                if e.is_corrupt_data() {
                    persisted.discard_saved();
                }
            }
        }
        persisted
    }

    /// Loads with the default keys.
    pub fn load_default(store: S) -> Self {
        Self::load(store, PersistenceConfig::default())
    }

    /// Selects a square and saves if a mark was placed.
    #[instrument(skip(self))]
    pub fn select_square(&mut self, index: usize) -> MoveOutcome {
        let outcome = self.game.select_square(index);
        if outcome.is_applied() {
            self.save();
        }
        outcome
    }

    /// Jumps to a history step and saves if the step changed.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::StepOutOfRange`] for steps outside the history.
    #[instrument(skip(self))]
    pub fn jump_to_step(&mut self, step: usize) -> Result<(), HistoryError> {
        let previous = self.game.current_step();
        self.game.jump_to_step(step)?;
        if previous != step {
            self.save();
        }
        Ok(())
    }

    /// Restarts the game and saves.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.game.restart();
        self.save();
    }

    /// The game, for every derived query.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The keys in use.
    pub fn config(&self) -> &PersistenceConfig {
        &self.config
    }

    /// Consumes the owner, returning the game and the store.
    pub fn into_parts(self) -> (Game, S) {
        (self.game, self.store)
    }

    fn read_game(&self) -> Result<Option<Game>, LoadError> {
        let history_key = self.config.history_key();
        let step_key = self.config.current_step_key();

        let history = self.store.get(history_key).map_err(LoadError::Store)?;
        let step = self.store.get(step_key).map_err(LoadError::Store)?;

        let (history, step) = match (history, step) {
            (None, None) => return Ok(None),
            (Some(history), Some(step)) => (history, step),
            _ => return Err(LoadError::Partial(history_key.clone(), step_key.clone())),
        };

        let history: Vec<Board> = serde_json::from_str(&history)
            .map_err(|e| LoadError::Decode(history_key.clone(), e))?;
        let current_step: usize =
            serde_json::from_str(&step).map_err(|e| LoadError::Decode(step_key.clone(), e))?;

        Game::from_snapshot(GameSnapshot::new(history, current_step))
            .map(Some)
            .map_err(LoadError::Snapshot)
    }

    fn discard_saved(&mut self) {
        for key in [self.config.history_key(), self.config.current_step_key()] {
            if let Err(e) = self.store.remove(key) {
                warn!(%key, error = %e, "Failed to remove saved value");
            }
        }
    }

    fn save(&mut self) {
        let history = match serde_json::to_string(self.game.history()) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Failed to encode history");
                return;
            }
        };
        let step = self.game.current_step().to_string();

        let writes = [
            (self.config.history_key(), history),
            (self.config.current_step_key(), step),
        ];
        for (key, value) in writes {
            if let Err(e) = self.store.set(key, value) {
                warn!(%key, error = %e, "Failed to save game state");
            }
        }
        debug!(current_step = self.game.current_step(), "Game state saved");
    }
}
