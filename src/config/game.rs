//! Game configuration module.
//!
//! Rules of a session: the evidence threshold for a successful accusation,
//! the size of the suspect table, and how dead-end rooms are handled.

use super::{ConfigResult, Validate};
use crate::data_structures::suspect_lookup::DEFAULT_BUCKET_COUNT;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// What happens when the player reaches a room with no children.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeadEndPolicy {
    /// The player must still choose to leave
    #[default]
    RequireExit,
    /// Exploration ends as soon as the dead-end room has been searched
    AutoExit,
}

/// Game configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Clues that must point at the accused for a win
    pub win_threshold: usize,

    /// Number of buckets in the suspect table
    pub bucket_count: usize,

    /// Dead-end handling
    pub dead_end: DeadEndPolicy,

    /// Suspect assigned to clues no rule matches
    pub unknown_suspect: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            win_threshold: 2,
            bucket_count: DEFAULT_BUCKET_COUNT,
            dead_end: DeadEndPolicy::default(),
            unknown_suspect: "Unknown".to_string(),
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.win_threshold == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "game.win_threshold".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if self.bucket_count == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "game.bucket_count".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if self.unknown_suspect.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "unknown_suspect cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
