//! Key-value store capability used to persist games.

use derive_more::{Display, Error};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Store error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// A string-keyed store of textual blobs.
///
/// This is the only capability a [`PersistedGame`](crate::PersistedGame)
/// needs: read a value once on load, write it after every change.
pub trait KeyValueStore {
    /// Reads the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store cannot be written.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;

    /// Deletes the value stored under `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store, for tests and for embedding without persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    #[instrument(skip(self, value), fields(bytes = value.len()))]
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        debug!("Storing value");
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    #[instrument(skip(self))]
    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        debug!("Removing value");
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("history").unwrap(), None);

        store.set("history", "[]".to_string()).unwrap();
        assert_eq!(store.get("history").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.len(), 1);

        store.remove("history").unwrap();
        store.remove("history").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_error_records_location() {
        let err = StoreError::new("disk full");
        assert_eq!(err.file, file!());
        assert!(err.to_string().contains("disk full"));
    }
}
