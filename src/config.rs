//! Console configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the interactive console.
///
/// Every field has a default, so an empty TOML file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Prompt printed before each command.
    #[serde(default = "default_prompt")]
    prompt: String,

    /// Print the history jump list after every change.
    #[serde(default = "default_true")]
    show_history: bool,

    /// Bracket the squares of a winning line.
    #[serde(default = "default_true")]
    highlight_winner: bool,
}

#[instrument]
fn default_prompt() -> String {
    "> ".to_string()
}

#[instrument]
fn default_true() -> bool {
    true
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            show_history: default_true(),
            highlight_winner: default_true(),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
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
    fn test_empty_toml_uses_defaults() {
        let config = ConsoleConfig::from_toml("").expect("empty config parses");
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.prompt(), "> ");
        assert!(*config.show_history());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = ConsoleConfig::from_toml("show_history = false\nprompt = \"ttt> \"\n")
            .expect("valid config");
        assert!(!*config.show_history());
        assert!(*config.highlight_winner());
        assert_eq!(config.prompt(), "ttt> ");
    }

    #[test]
    fn test_bad_toml_reports_error() {
        let err = ConsoleConfig::from_toml("show_history = \"maybe\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_reports_error() {
        let err = ConsoleConfig::from_file("/nonexistent/console.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }
}
