use std::collections::HashMap;
use thiserror::Error;

/// Default database file when `DATABASE_PATH` is unset.
pub const DEFAULT_DATABASE_PATH: &str = "example.sqlite";

/// Default cap on the highest seeded id when `SEED_LIMIT` is unset.
pub const DEFAULT_SEED_LIMIT: i64 = 2;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub seed_limit: i64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let database_path = env_map
            .get("DATABASE_PATH")
            .cloned()
            .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string());

        let seed_limit = match env_map.get("SEED_LIMIT") {
            Some(raw) => raw.parse::<i64>().map_err(|_| {
                ConfigError::InvalidValue(
                    "SEED_LIMIT".to_string(),
                    "must be a valid i64".to_string(),
                )
            })?,
            None => DEFAULT_SEED_LIMIT,
        };

        if seed_limit < 1 {
            return Err(ConfigError::InvalidValue(
                "SEED_LIMIT".to_string(),
                format!("must be at least 1, got {}", seed_limit),
            ));
        }

        Ok(Config {
            database_path,
            seed_limit,
        })
    }
}
