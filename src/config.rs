//! Runtime configuration for the game binaries.

use crate::ai::DEFAULT_SMART_CHANCE;
use crate::session::GameMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration shared by the console and TUI front ends.
///
/// Every field has a default, so a config file only needs the keys it
/// overrides.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Mode used when none is given on the command line.
    #[serde(default = "default_mode")]
    default_mode: GameMode,

    /// Probability that the easy AI attempts a smart move.
    #[serde(default = "default_smart_chance")]
    smart_chance: f64,

    /// Artificial thinking delay for computer moves in the TUI, in
    /// milliseconds.
    #[serde(default = "default_thinking_delay_ms")]
    thinking_delay_ms: u64,
}

fn default_mode() -> GameMode {
    GameMode::Easy
}

fn default_smart_chance() -> f64 {
    DEFAULT_SMART_CHANCE
}

fn default_thinking_delay_ms() -> u64 {
    500
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_mode: default_mode(),
            smart_chance: default_smart_chance(),
            thinking_delay_ms: default_thinking_delay_ms(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        let config = config.validate()?;
        info!(?config, "config loaded successfully");
        Ok(config)
    }

    /// Loads the file at `path` when given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&self.smart_chance) {
            return Err(ConfigError::new(format!(
                "smart_chance must be between 0 and 1, got {}",
                self.smart_chance
            )));
        }
        Ok(self)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
