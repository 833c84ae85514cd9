//! Session configuration loaded from TOML.

use crate::games::tictactoe::Mark;
use crate::surface::Tint;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Display and logging settings for a session.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct DuelConfig {
    /// Title shown above the board.
    title: String,

    /// Label in front of the human's score.
    player_label: String,

    /// Label in front of the computer's score.
    computer_label: String,

    /// Mark the human plays; the computer gets the other one.
    human_mark: Mark,

    /// Color of the three winning cells.
    win_tint: Tint,

    /// Color of the whole board on a tie.
    tie_tint: Tint,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            title: "Tic-Tac-Toe".to_string(),
            player_label: "You".to_string(),
            computer_label: "Computer".to_string(),
            human_mark: Mark::X,
            win_tint: Tint::Cyan,
            tie_tint: Tint::Red,
            log_filter: "info".to_string(),
        }
    }
}

impl DuelConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(human_mark = %config.human_mark, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Mark the computer plays.
    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent()
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(DuelConfig::from_toml("").unwrap(), DuelConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = DuelConfig::from_toml("player_label = \"Me\"\nwin_tint = \"green\"\n").unwrap();
        assert_eq!(config.player_label(), "Me");
        assert_eq!(*config.win_tint(), Tint::Green);
        assert_eq!(config.computer_label(), "Computer");
        assert_eq!(*config.tie_tint(), Tint::Red);
    }

    #[test]
    fn test_human_mark_o_gives_computer_x() {
        let config = DuelConfig::from_toml("human_mark = \"O\"").unwrap();
        assert_eq!(config.computer_mark(), Mark::X);
    }

    #[test]
    fn test_unknown_tint_rejected() {
        let err = DuelConfig::from_toml("tie_tint = \"plaid\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}
