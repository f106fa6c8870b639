//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.msgboard.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `MSGBOARD_API_BASE`, `MSGBOARD_NICKNAME`,
//!    and friends
//! 4. **Command-line arguments** – `--api-base`/`-a`, `--nickname`/`-n`, ...
//!
//! # Configuration File
//!
//! ```toml
//! api_base = "https://student-json-api.lidemy.me"
//! nickname = "User Pei"
//! max_length = 150
//! timeout_seconds = 10
//! log_file = "msgboard.log"
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::api::{BoardEndpoint, BoardError};

/// Default board API root.
pub const DEFAULT_API_BASE: &str = "https://student-json-api.lidemy.me";

/// Default author name attached to new messages.
pub const DEFAULT_NICKNAME: &str = "User Pei";

/// Default draft length cap in characters.
pub const DEFAULT_MAX_LENGTH: usize = 150;

const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Interactive TUI for reading and posting messages.
    Interactive,
    /// Print the current board once and exit.
    ListOnce,
    /// Post one message and exit.
    PostOnce,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use msgboard::BoardConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = BoardConfig::load().expect("failed to load configuration");
/// let endpoint = config.endpoint().expect("API base must be a valid URL");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "MSGBOARD",
    discovery(
        dotfile_name = ".msgboard.toml",
        config_file_name = "msgboard.toml",
        app_name = "msgboard"
    )
)]
pub struct BoardConfig {
    /// Root URL of the board API.
    ///
    /// Can be provided via:
    /// - CLI: `--api-base <URL>` or `-a <URL>`
    /// - Environment: `MSGBOARD_API_BASE`
    /// - Config file: `api_base = "..."`
    #[ortho_config(cli_short = 'a')]
    pub api_base: String,

    /// Author name sent with every new message.
    ///
    /// Can be provided via:
    /// - CLI: `--nickname <NAME>` or `-n <NAME>`
    /// - Environment: `MSGBOARD_NICKNAME`
    /// - Config file: `nickname = "..."`
    #[ortho_config(cli_short = 'n')]
    pub nickname: String,

    /// Maximum draft length in characters.
    ///
    /// Edits that would push the draft past this length are rejected.
    /// Must be at least 1.
    #[ortho_config(cli_short = 'm')]
    pub max_length: usize,

    /// HTTP request timeout, in seconds.
    #[ortho_config()]
    pub timeout_seconds: u64,

    /// Prints the board once and exits instead of starting the TUI.
    ///
    /// Can be provided via:
    /// - CLI: `--list` / `-l`
    /// - Config file: `list = true`
    ///
    /// Note: `MSGBOARD_LIST` is not supported because `ortho_config` does not
    /// load boolean values from the environment.
    #[ortho_config(cli_short = 'l')]
    pub list: bool,

    /// Posts this text once and exits instead of starting the TUI.
    ///
    /// Can be provided via:
    /// - CLI: `--post <TEXT>` or `-p <TEXT>`
    /// - Environment: `MSGBOARD_POST`
    #[ortho_config(cli_short = 'p')]
    pub post: Option<String>,

    /// File that receives diagnostic logs.
    ///
    /// Logging is disabled when unset. The TUI owns the terminal, so logs are
    /// never written to stdout or stderr.
    #[ortho_config()]
    pub log_file: Option<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            nickname: DEFAULT_NICKNAME.to_owned(),
            max_length: DEFAULT_MAX_LENGTH,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            list: false,
            post: None,
            log_file: None,
        }
    }
}

impl BoardConfig {
    /// Determines the operation mode based on provided configuration.
    ///
    /// Posting wins over listing; with neither set the TUI runs.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.post.is_some() {
            OperationMode::PostOnce
        } else if self.list {
            OperationMode::ListOnce
        } else {
            OperationMode::Interactive
        }
    }

    /// Parses the configured API base.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidUrl`] when `api_base` is not an HTTP(S)
    /// URL.
    pub fn endpoint(&self) -> Result<BoardEndpoint, BoardError> {
        BoardEndpoint::parse(&self.api_base)
    }

    /// Returns the HTTP timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Returns the draft length cap after validation.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Configuration`] when `max_length` is zero.
    pub fn require_max_length(&self) -> Result<usize, BoardError> {
        if self.max_length == 0 {
            return Err(BoardError::Configuration {
                message: "max_length must be at least 1".to_owned(),
            });
        }
        Ok(self.max_length)
    }

    /// Returns the nickname with surrounding whitespace removed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Configuration`] when the nickname is blank.
    pub fn require_nickname(&self) -> Result<&str, BoardError> {
        let trimmed = self.nickname.trim();
        if trimmed.is_empty() {
            return Err(BoardError::Configuration {
                message: "nickname must not be blank (use --nickname or -n)".to_owned(),
            });
        }
        Ok(trimmed)
    }

    /// Returns the text to post in [`OperationMode::PostOnce`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Configuration`] when no post text is configured.
    pub fn require_post_text(&self) -> Result<&str, BoardError> {
        self.post
            .as_deref()
            .ok_or_else(|| BoardError::Configuration {
                message: "post text is required (use --post or -p)".to_owned(),
            })
    }
}

#[cfg(test)]
mod tests;
