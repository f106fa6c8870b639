//! Error types exposed by the message board client.

use thiserror::Error;

/// Errors surfaced while configuring the client or talking to the board API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// Networking failed while calling the board API.
    #[error("network error talking to the message board: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The response body was not the JSON shape the client expects.
    #[error("unexpected response from the message board: {message}")]
    Decode {
        /// Decoder error detail, including the HTTP status when known.
        message: String,
    },

    /// A draft was rejected before it was sent.
    #[error("message rejected: {message}")]
    Validation {
        /// Why the draft was rejected.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The terminal UI failed to start or crashed.
    #[error("terminal UI error: {message}")]
    Terminal {
        /// Error detail reported by the TUI runtime.
        message: String,
    },
}
