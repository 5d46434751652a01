//! Persistence configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable overriding [`PersistenceConfig::history_key`].
pub const HISTORY_KEY_VAR: &str = "STRICTLY_HISTORY_KEY";

/// Environment variable overriding [`PersistenceConfig::current_step_key`].
pub const CURRENT_STEP_KEY_VAR: &str = "STRICTLY_CURRENT_STEP_KEY";

/// Store keys a persisted game reads on load and writes on change.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", into)]
pub struct PersistenceConfig {
    /// Key holding the JSON-encoded board history.
    #[serde(default = "default_history_key")]
    history_key: String,

    /// Key holding the JSON-encoded current step.
    #[serde(default = "default_current_step_key")]
    current_step_key: String,
}

#[instrument]
fn default_history_key() -> String {
    "history".to_string()
}

#[instrument]
fn default_current_step_key() -> String {
    "currentStep".to_string()
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            history_key: default_history_key(),
            current_step_key: default_current_step_key(),
        }
    }
}

impl PersistenceConfig {
    /// Loads configuration from a TOML file. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(
            history_key = %config.history_key,
            current_step_key = %config.current_step_key,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `.env`, then the optional TOML file, then applies environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is unreadable or the resulting
    /// keys are invalid.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = base.with_overrides(|var| std::env::var(var).ok());
        config.validate()?;
        Ok(config)
    }

    /// Replaces keys whose override variable `lookup` resolves.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup(HISTORY_KEY_VAR) {
            debug!(%key, "Overriding history key");
            self.history_key = key;
        }
        if let Some(key) = lookup(CURRENT_STEP_KEY_VAR) {
            debug!(%key, "Overriding current step key");
            self.current_step_key = key;
        }
        self
    }

    /// Checks that both keys are non-empty and distinct.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_key.trim().is_empty() || self.current_step_key.trim().is_empty() {
            return Err(ConfigError::new("Store keys must not be empty".to_string()));
        }
        if self.history_key == self.current_step_key {
            return Err(ConfigError::new(format!(
                "History and current step share the key '{}'",
                self.history_key
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
