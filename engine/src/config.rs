//! Engine configuration.

use serde::Deserialize;
use std::env;

/// Longest owner name accepted by default.
pub const DEFAULT_MAX_OWNER_NAME_LEN: usize = 20;

/// Tunables for a [`Directory`](crate::Directory).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Maximum owner name length, in characters
    pub max_owner_name_len: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_owner_name_len: DEFAULT_MAX_OWNER_NAME_LEN,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables.
    ///
    /// `POKEDEX_MAX_OWNER_NAME_LEN` overrides the name bound; unset means the
    /// default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_name_len_var(env::var("POKEDEX_MAX_OWNER_NAME_LEN").ok().as_deref())
    }

    fn from_name_len_var(raw: Option<&str>) -> Result<Self, ConfigError> {
        let max_owner_name_len = match raw {
            Some(raw) => parse_name_len(raw)?,
            None => DEFAULT_MAX_OWNER_NAME_LEN,
        };

        Ok(Self { max_owner_name_len })
    }

    /// Check a candidate owner name against the configured bounds.
    pub fn accepts_name(&self, name: &str) -> bool {
        !name.is_empty() && name.chars().count() <= self.max_owner_name_len
    }
}

fn parse_name_len(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse() {
        Ok(0) | Err(_) => Err(ConfigError::InvalidNameLength(raw.to_string())),
        Ok(len) => Ok(len),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid POKEDEX_MAX_OWNER_NAME_LEN value: {0:?}")]
    InvalidNameLength(String),
}
