//! Main TUI application model implementing the MVU pattern.
//!
//! `BoardApp` owns the message list, the draft, two independent error slots,
//! the posting flag, and input focus. Network work is returned from handlers
//! as commands whose results come back as messages.
//!
//! # Module Structure
//!
//! - `model_impl`: `bubbletea_rs::Model` implementation and viewport
//!   normalisation
//! - `rendering`: View rendering methods for terminal output
//! - `fetch_handlers`: List loading and refresh
//! - `post_handlers`: Submitting the draft
//! - `draft_handlers`: Focus changes and draft edits
//! - `navigation`: List scrolling
//! - `lifecycle_handlers`: Startup, resize, help, and quit

use std::sync::Arc;

use bubbletea_rs::Cmd;

use crate::api::{Message, MessageGateway};
use crate::config::{DEFAULT_MAX_LENGTH, DEFAULT_NICKNAME};

use super::messages::AppMsg;
use super::state::{DraftState, FetchSequence, InputFocus, PostingState};

mod draft_handlers;
mod fetch_handlers;
mod lifecycle_handlers;
mod model_impl;
mod navigation;
mod post_handlers;
mod rendering;

/// Error shown when a command runs without a configured gateway.
const GATEWAY_MISSING: &str = "message board gateway is not configured";

/// Main application model for the message board TUI.
#[derive(Debug)]
pub struct BoardApp {
    /// Messages from the most recently applied fetch, in received order.
    pub(crate) messages: Vec<Message>,
    /// Text being composed.
    pub(crate) draft: DraftState,
    /// Last list-fetch failure, if any.
    pub(crate) fetch_error: Option<String>,
    /// Last post failure or server rejection, if any.
    pub(crate) post_error: Option<String>,
    /// Whether a create request is in flight.
    pub(crate) posting: PostingState,
    /// Which part of the screen receives typed keys.
    pub(crate) focus: InputFocus,
    /// Ordering guard for list fetches.
    fetch_sequence: FetchSequence,
    /// Number of rendered list lines scrolled past.
    pub(crate) scroll_offset: usize,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Whether the startup message has been handled.
    has_initialized: bool,
    /// Gateway for list and create requests.
    gateway: Option<Arc<dyn MessageGateway>>,
    /// Author name attached to new messages.
    nickname: String,
}

impl BoardApp {
    /// Creates an application with no messages and no gateway.
    #[must_use]
    pub fn new(nickname: impl Into<String>, max_length: usize) -> Self {
        Self {
            messages: Vec::new(),
            draft: DraftState::new(max_length.max(1)),
            fetch_error: None,
            post_error: None,
            posting: PostingState::Idle,
            focus: InputFocus::List,
            fetch_sequence: FetchSequence::default(),
            scroll_offset: 0,
            width: 80,
            height: 24,
            show_help: false,
            has_initialized: false,
            gateway: None,
            nickname: nickname.into(),
        }
    }

    /// Creates an application with the default nickname and draft cap.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(DEFAULT_NICKNAME, DEFAULT_MAX_LENGTH)
    }

    /// Attaches the gateway used for list and create requests.
    #[must_use]
    pub fn with_gateway(mut self, gateway: Arc<dyn MessageGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    /// Sets explicit terminal dimensions.
    #[must_use]
    pub const fn with_dimensions(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Returns the messages currently shown.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the current draft text.
    #[must_use]
    pub const fn draft_text(&self) -> &str {
        self.draft.text()
    }

    /// Returns the fetch-error slot.
    #[must_use]
    pub fn fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }

    /// Returns the post-error slot.
    #[must_use]
    pub fn post_error(&self) -> Option<&str> {
        self.post_error.as_deref()
    }

    /// Returns `true` while a submission is in flight.
    #[must_use]
    pub const fn is_posting(&self) -> bool {
        self.posting.is_posting()
    }

    /// Returns which part of the screen has keyboard focus.
    #[must_use]
    pub const fn focus(&self) -> InputFocus {
        self.focus
    }

    /// Handles a message and updates state accordingly.
    ///
    /// State is mutated in place; any side effect is returned as a command
    /// whose result is delivered back as another message.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_draft() {
            return self.handle_draft_msg(msg);
        }
        if msg.is_fetch() {
            return self.handle_fetch_msg(msg);
        }
        if msg.is_post() {
            return self.handle_post_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }
}


#[cfg(test)]
mod draft_handlers_tests;





#[cfg(test)]
mod test_support;
