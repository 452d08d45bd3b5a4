//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "compass_games.toml";

/// Settings for the terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Seed for the opponent's random picks. Entropy when absent.
    #[setters(strip_option)]
    seed: Option<u64>,

    /// Candidate pauses before each opponent move, in milliseconds.
    /// One is picked at random per move; empty disables the pause.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: Vec<u64>,

    /// Clear the terminal before every board draw.
    #[serde(default = "default_clear_screen")]
    clear_screen: bool,

    /// Where tracing output goes.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_think_delay_ms() -> Vec<u64> {
    vec![200, 300, 400, 500, 600]
}

#[instrument]
fn default_clear_screen() -> bool {
    true
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("compass_games.log")
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            think_delay_ms: default_think_delay_ms(),
            clear_screen: default_clear_screen(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config: {}", e))
        })?;

        info!(seeded = config.seed.is_some(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else the default file if it exists, else defaults.
    ///
    /// An explicitly named file must exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: GameConfig = toml::from_str("seed = 7").unwrap();
        assert_eq!(config.seed(), &Some(7));
        assert_eq!(config.think_delay_ms(), &vec![200, 300, 400, 500, 600]);
        assert!(*config.clear_screen());
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_setters_override() {
        let config = GameConfig::default()
            .with_seed(3)
            .with_think_delay_ms(Vec::new())
            .with_clear_screen(false);
        assert_eq!(config.seed(), &Some(3));
        assert!(config.think_delay_ms().is_empty());
        assert!(!*config.clear_screen());
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = toml::from_str::<GameConfig>("think_delay_ms = \"slow\"").unwrap_err();
        let wrapped = ConfigError::new(format!("Failed to parse config: {}", err));
        assert!(wrapped.to_string().starts_with("Config error: Failed to parse config"));
    }
}
