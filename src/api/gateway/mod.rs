//! Gateways for reading and writing board messages.
//!
//! The trait-based design lets the TUI and CLI depend on [`MessageGateway`]
//! while tests substitute mocks; [`ReqwestMessageGateway`] performs the real
//! HTTP requests.

mod error_mapping;
mod reqwest_gateway;

pub use reqwest_gateway::ReqwestMessageGateway;

use async_trait::async_trait;

use crate::api::error::BoardError;
use crate::api::models::{Message, NewMessage, PostOutcome};

/// Gateway that can list and create board messages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageGateway: Send + Sync + std::fmt::Debug {
    /// Fetch all messages, newest first.
    async fn list_messages(&self) -> Result<Vec<Message>, BoardError>;

    /// Submit a new message and return the server's verdict.
    ///
    /// A decoded verdict is returned even when the server rejected the
    /// message; only transport and decoding failures are errors.
    async fn create_message(&self, message: &NewMessage) -> Result<PostOutcome, BoardError>;
}

#[cfg(test)]
mod tests;
