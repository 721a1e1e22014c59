//! Application configuration loaded from TOML.

use crate::error::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tic_tac_types::Player;
use tracing::{debug, info, instrument};

/// Default config file, read from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "tic_tac_types.toml";

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Rendered boards.
    #[default]
    Text,
    /// A single JSON report.
    Json,
}

/// Settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Player who moves first.
    #[serde(default = "default_starting_player")]
    starting_player: Player,

    /// Output format.
    #[serde(default)]
    format: OutputFormat,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_starting_player() -> Player {
    Player::X
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            starting_player: default_starting_player(),
            format: OutputFormat::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(starting_player = %config.starting_player, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the explicit config file, or the default file if it exists.
    ///
    /// An explicitly named file must exist. A missing default file yields
    /// the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Overrides file settings with command-line values.
    pub fn with_overrides(mut self, starting_player: Option<Player>, format: Option<OutputFormat>) -> Self {
        if let Some(player) = starting_player {
            self.starting_player = player;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: AppConfig = toml::from_str("").expect("parse");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_overrides_win() {
        let config = AppConfig::default().with_overrides(Some(Player::O), Some(OutputFormat::Json));
        assert_eq!(*config.starting_player(), Player::O);
        assert_eq!(*config.format(), OutputFormat::Json);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(toml::from_str::<AppConfig>("colour = \"red\"").is_err());
    }
}
