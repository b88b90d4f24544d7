//! # System Configuration
//!
//! Settings for [`FranchiseSystem`](crate::lifecycle::FranchiseSystem), read from the
//! environment with defaults for anything unset.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `FRANCHISE_CHANNEL_CAPACITY` | `32` | Request buffer of the store actor |
//! | `FRANCHISE_MAX_ATTEMPTS` | `5` | Load-mutate-store attempts before giving up with `Conflict` |
//! | `FRANCHISE_ID_STRATEGY` | `uuid` | `uuid` or `sequential` |

use crate::id_gen::{IdGenerator, SequentialIds, UuidGenerator};
use serde::Deserialize;
use std::env;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

const CHANNEL_CAPACITY: &str = "FRANCHISE_CHANNEL_CAPACITY";
const MAX_ATTEMPTS: &str = "FRANCHISE_MAX_ATTEMPTS";
const ID_STRATEGY: &str = "FRANCHISE_ID_STRATEGY";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is invalid: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// How new entity ids are generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Uuid,
    Sequential,
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uuid" => Ok(IdStrategy::Uuid),
            "sequential" => Ok(IdStrategy::Sequential),
            _ => Err("expected `uuid` or `sequential`".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub channel_capacity: usize,
    pub max_attempts: u32,
    pub id_strategy: IdStrategy,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            max_attempts: 5,
            id_strategy: IdStrategy::Uuid,
        }
    }
}

impl SystemConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            channel_capacity: parse_or(&lookup, CHANNEL_CAPACITY, defaults.channel_capacity)?,
            max_attempts: parse_or(&lookup, MAX_ATTEMPTS, defaults.max_attempts)?,
            id_strategy: parse_or(&lookup, ID_STRATEGY, defaults.id_strategy)?,
        };
        if config.channel_capacity == 0 {
            return Err(invalid(CHANNEL_CAPACITY, "0", "must be at least 1"));
        }
        if config.max_attempts == 0 {
            return Err(invalid(MAX_ATTEMPTS, "0", "must be at least 1"));
        }
        Ok(config)
    }

    pub fn id_generator(&self) -> Arc<dyn IdGenerator> {
        match self.id_strategy {
            IdStrategy::Uuid => Arc::new(UuidGenerator),
            IdStrategy::Sequential => Arc::new(SequentialIds::new("id")),
        }
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| invalid(var, &value, e.to_string())),
    }
}

fn invalid(var: &'static str, value: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: reason.into(),
    }
}
