//! Session configuration from environment variables.
//!
//! - `TUI_2048_SIZE`: grid side length (default 6, valid 2..=16)
//! - `TUI_2048_SEED`: RNG seed for a reproducible session (default: random)
//! - `TUI_2048_LOG_PATH`: write logs to this file (default: no logging)
//! - `TUI_2048_LOG`: log filter directive (default "info")

use crate::core::{GridEngine, GridError};
use crate::types::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

pub const SIZE_VAR: &str = "TUI_2048_SIZE";
pub const SEED_VAR: &str = "TUI_2048_SEED";
pub const LOG_PATH_VAR: &str = "TUI_2048_LOG_PATH";
pub const LOG_FILTER_VAR: &str = "TUI_2048_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub seed: Option<u64>,
    pub log_path: Option<String>,
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            seed: None,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let size = non_empty(SIZE_VAR)
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_BOARD_SIZE);

        let seed = non_empty(SEED_VAR).and_then(|s| s.parse().ok());

        let log_path = non_empty(LOG_PATH_VAR);

        let log_filter = non_empty(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            size,
            seed,
            log_path,
            log_filter,
        }
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.size) {
            Ok(())
        } else {
            Err(GridError::SizeOutOfRange {
                size: self.size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            })
        }
    }

    /// Empty engine for this configuration (no tiles placed yet).
    pub fn build_engine(&self) -> Result<GridEngine, GridError> {
        self.validate()?;
        match self.seed {
            Some(seed) => GridEngine::new(self.size, seed),
            None => GridEngine::with_size(self.size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = GameConfig::from_lookup(lookup(&[]));
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.size, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reads_every_variable() {
        let config = GameConfig::from_lookup(lookup(&[
            (SIZE_VAR, "4"),
            (SEED_VAR, " 99 "),
            (LOG_PATH_VAR, "/tmp/2048.log"),
            (LOG_FILTER_VAR, "debug"),
        ]));
        assert_eq!(config.size, 4);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.log_path.as_deref(), Some("/tmp/2048.log"));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let config = GameConfig::from_lookup(lookup(&[
            (SIZE_VAR, "six"),
            (SEED_VAR, "-1"),
            (LOG_PATH_VAR, "   "),
        ]));
        assert_eq!(config.size, DEFAULT_BOARD_SIZE);
        assert_eq!(config.seed, None);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn out_of_range_size_fails_validation() {
        let config = GameConfig::from_lookup(lookup(&[(SIZE_VAR, "40")]));
        assert_eq!(
            config.validate(),
            Err(GridError::SizeOutOfRange {
                size: 40,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE
            })
        );
        assert!(config.build_engine().is_err());
    }

    #[test]
    fn seeded_config_builds_seeded_engine() {
        let config = GameConfig {
            size: 3,
            seed: Some(5),
            ..GameConfig::default()
        };
        let engine = config.build_engine().unwrap();
        assert_eq!(engine.size(), 3);
        assert_eq!(engine.seed(), 5);
        assert_eq!(engine.score(), 0);
    }
}
