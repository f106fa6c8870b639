//! msgboard CLI entrypoint.
//!
//! Loads layered configuration, installs file logging when requested, and
//! runs the selected operation mode.

use std::io::{self, Write};
use std::process::ExitCode;

use msgboard::{BoardConfig, BoardError, OperationMode};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), BoardError> {
    let config = load_config()?;
    cli::logging::init(config.log_file.as_deref())?;
    tracing::debug!("starting in {:?} mode", config.operation_mode());

    match config.operation_mode() {
        OperationMode::PostOnce => cli::post_once::run(&config).await,
        OperationMode::ListOnce => cli::list_once::run(&config).await,
        OperationMode::Interactive => cli::board_tui::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`BoardError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<BoardConfig, BoardError> {
    BoardConfig::load().map_err(|error| BoardError::Configuration {
        message: error.to_string(),
    })
}
