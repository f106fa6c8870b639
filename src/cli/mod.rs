//! CLI operation mode handlers.
//!
//! This module contains the implementations for the operation modes:
//! - [`board_tui`]: Interactive TUI for reading and posting messages
//! - [`list_once`]: Print the board once
//! - [`post_once`]: Post one message
//!
//! Output formatting utilities are in [`output`]; log setup is in
//! [`logging`].

use msgboard::{BoardConfig, BoardError, ReqwestMessageGateway};

pub mod board_tui;
pub mod list_once;
pub mod logging;
pub mod output;
pub mod post_once;

/// Builds the HTTP gateway described by `config`.
///
/// # Errors
///
/// Returns [`BoardError::InvalidUrl`] for a bad `api_base`, or
/// [`BoardError::Configuration`] when the HTTP client cannot be built.
pub fn build_gateway(config: &BoardConfig) -> Result<ReqwestMessageGateway, BoardError> {
    ReqwestMessageGateway::new(config.endpoint()?, config.timeout())
}

#[cfg(test)]
pub mod test_utils;
