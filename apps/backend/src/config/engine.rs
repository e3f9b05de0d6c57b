//! Engine limits loaded from the environment.
//!
//! Hosts that carry their own configuration can deserialize
//! [`EngineConfig`] directly; everyone else calls [`EngineConfig::from_env`].

use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::ErrorCode;

/// Env var holding the maximum number of players per game.
pub const MAX_PLAYERS_VAR: &str = "BOWLING_MAX_PLAYERS";

/// Players allowed on one lane when nothing is configured.
pub const DEFAULT_MAX_PLAYERS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must be at least 1")]
    Zero { var: &'static str },
}

impl ConfigError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::ConfigError
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound checked by `create_initial_state`.
    pub max_players: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_players: DEFAULT_MAX_PLAYERS,
        }
    }
}

impl EngineConfig {
    /// Load from `BOWLING_MAX_PLAYERS`, falling back to the default when unset
    /// or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let Ok(raw) = env::var(MAX_PLAYERS_VAR) else {
            return Ok(Self::default());
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let max_players = trimmed
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidNumber {
                var: MAX_PLAYERS_VAR,
                value: raw.clone(),
            })?;
        Self::new(max_players)
    }

    pub fn new(max_players: usize) -> Result<Self, ConfigError> {
        if max_players == 0 {
            return Err(ConfigError::Zero {
                var: MAX_PLAYERS_VAR,
            });
        }
        Ok(Self { max_players })
    }
}
