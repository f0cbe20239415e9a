//! Game configuration
//!
//! Settings are read from JSON. Every field is optional in the file; anything
//! left out keeps its default. Lookup order:
//!
//! 1. `config/timefighter.json` relative to the working directory
//! 2. `<config dir>/timefighter/config.json` (e.g. `~/.config` on Linux)
//!
//! If neither exists the defaults are used. A file that exists but does not
//! parse or holds invalid values is an error rather than silently ignored.
//!
//! # Example
//!
//! ```json
//! {
//!     "initial_countdown_ms": 30000,
//!     "countdown_interval_ms": 1000,
//!     "window_scale": 2
//! }
//! ```

use crate::game::CountdownSettings;
use crate::game::state::{COUNTDOWN_INTERVAL_MS, INITIAL_COUNTDOWN_MS};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const LOCAL_CONFIG_PATH: &str = "config/timefighter.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Length of a round
    pub initial_countdown_ms: i64,

    /// Spacing between timer ticks
    pub countdown_interval_ms: i64,

    /// How long the end-of-round message stays up
    pub toast_duration_ms: u64,

    /// Fixed window scale; detected from the monitor when absent
    pub window_scale: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            initial_countdown_ms: INITIAL_COUNTDOWN_MS,
            countdown_interval_ms: COUNTDOWN_INTERVAL_MS,
            toast_duration_ms: 3_500,
            window_scale: None,
        }
    }
}

/// Error types for configuration loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(serde_json::Error),
    InvalidValue(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::InvalidValue(msg) => write!(f, "Invalid config value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err)
    }
}

impl GameConfig {
    /// Load from the first config file found, or fall back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        for path in Self::search_paths() {
            if path.exists() {
                let config = Self::load_from_file(&path)?;
                log::info!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_PATH)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("timefighter").join("config.json"));
        }
        paths
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_countdown_ms <= 0 {
            return Err(ConfigError::InvalidValue(format!(
                "initial_countdown_ms must be positive (got {})",
                self.initial_countdown_ms
            )));
        }
        if self.countdown_interval_ms <= 0 {
            return Err(ConfigError::InvalidValue(format!(
                "countdown_interval_ms must be positive (got {})",
                self.countdown_interval_ms
            )));
        }
        if self.window_scale == Some(0) {
            return Err(ConfigError::InvalidValue("window_scale must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn countdown_settings(&self) -> CountdownSettings {
        CountdownSettings {
            initial_countdown_ms: self.initial_countdown_ms,
            interval_ms: self.countdown_interval_ms,
        }
    }
}
