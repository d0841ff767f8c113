//! Log setup for the terminal binary.
//!
//! The game owns the terminal in raw mode, so logs never go to stdout or
//! stderr. They are written to `GameConfig::log_path` when one is configured
//! and dropped otherwise.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::GameConfig;

/// Install the global subscriber. Returns false when logging is disabled.
pub fn init_logging(config: &GameConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))?;

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_ansi(false).with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("installing tracing subscriber")?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_without_log_path() {
        let config = GameConfig::default();
        assert!(!init_logging(&config).unwrap());
    }

    #[test]
    fn unopenable_path_is_an_error() {
        let config = GameConfig {
            log_path: Some("/nonexistent-dir/for/sure/game.log".to_string()),
            ..GameConfig::default()
        };
        assert!(init_logging(&config).is_err());
    }
}
