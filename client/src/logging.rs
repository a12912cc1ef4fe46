use crate::config::Config;
use crate::error::{ClientError, Result};
use std::fs::OpenOptions;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Send tracing output to the configured log file.
///
/// The terminal belongs to the game, so nothing is written to stdout/stderr.
/// `RUST_LOG` takes precedence over the config's `log_level`.
pub fn init(config: &Config) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| ClientError::LogFilter {
            directive: config.log_level.clone(),
            reason: e.to_string(),
        })?,
    };

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .map_err(|source| ClientError::LogFile {
            path: config.log_file.clone(),
            source,
        })?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    // Only one global subscriber per process; a second init keeps the first
    if installed.is_err() {
        debug!(log_file = %config.log_file.display(), "Subscriber already installed, keeping it");
    }

    Ok(())
}
