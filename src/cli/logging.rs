//! Diagnostic logging setup.
//!
//! The TUI owns the terminal, so logs only ever go to a file.

use std::fs::OpenOptions;
use std::sync::Mutex;

use msgboard::BoardError;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the default log filter.
const LOG_FILTER_ENV: &str = "MSGBOARD_LOG";

/// Default filter when [`LOG_FILTER_ENV`] is unset.
const DEFAULT_FILTER: &str = "msgboard=debug";

/// Installs a file-backed `tracing` subscriber when `log_file` is set.
///
/// With no log file, nothing is installed and `tracing` events are dropped.
///
/// # Errors
///
/// Returns [`BoardError::Io`] when the file cannot be opened, or
/// [`BoardError::Configuration`] when a subscriber is already installed.
pub fn init(log_file: Option<&str>) -> Result<(), BoardError> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| BoardError::Io {
            message: format!("failed to open log file '{path}': {error}"),
        })?;

    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|error| BoardError::Configuration {
            message: format!("failed to initialise logging: {error}"),
        })
}
