//! TUI mode for reading and posting messages.
//!
//! This module provides the entry point for the interactive terminal user
//! interface.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use msgboard::tui::{BoardApp, BoardContext, set_board_context, set_initial_terminal_size};
use msgboard::{BoardConfig, BoardError};

use super::build_gateway;

/// Runs the interactive board TUI.
///
/// # Errors
///
/// Returns an error if:
/// - The API base URL is invalid
/// - The nickname is blank or the draft cap is zero
/// - The TUI fails to initialise
pub async fn run(config: &BoardConfig) -> Result<(), BoardError> {
    let gateway = build_gateway(config)?;
    let context = BoardContext {
        gateway: Arc::new(gateway),
        nickname: config.require_nickname()?.to_owned(),
        max_length: config.require_max_length()?,
    };

    // If already set (e.g. re-running the TUI in the same process), the
    // existing context remains.
    let _ = set_board_context(context);

    if let Ok((width, height)) = crossterm::terminal::size() {
        let _ = set_initial_terminal_size(width, height);
    }

    run_tui().await.map_err(|error| BoardError::Terminal {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `BoardApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // BoardApp::init() reads its context from module-level storage.
    let program = Program::<BoardApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
