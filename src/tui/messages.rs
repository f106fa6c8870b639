//! Message types for the TUI update loop.
//!
//! Messages represent user actions, async command results, and system
//! events.

use crate::api::{Message, PostOutcome};

/// Messages for the message board TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Scroll the message list up one line.
    ScrollUp,
    /// Scroll the message list down one line.
    ScrollDown,
    /// Scroll the message list up one page.
    PageUp,
    /// Scroll the message list down one page.
    PageDown,

    // Draft editing
    /// Move keyboard focus into the draft input.
    FocusDraft,
    /// Return keyboard focus to the message list.
    FocusList,
    /// Propose a complete new draft value.
    DraftChanged(String),
    /// Type one character into the draft.
    DraftInsertChar(char),
    /// Delete the last character of the draft.
    DraftBackspace,

    // List fetching
    /// Re-run the list fetch.
    RefreshRequested,
    /// A list fetch completed.
    MessagesLoaded {
        /// Sequence number assigned when the fetch was issued.
        seq: u64,
        /// Messages in the order the server returned them.
        messages: Vec<Message>,
        /// Request round-trip time in milliseconds.
        latency_ms: u64,
    },
    /// A list fetch failed.
    MessagesFailed {
        /// Sequence number assigned when the fetch was issued.
        seq: u64,
        /// Human-readable failure description.
        error: String,
    },

    // Posting
    /// Submit the current draft.
    SubmitRequested,
    /// The create request returned a decodable response.
    PostCompleted {
        /// Server verdict.
        outcome: PostOutcome,
        /// Request round-trip time in milliseconds.
        latency_ms: u64,
    },
    /// The create request failed before a verdict was received.
    PostFailed(String),

    // Application lifecycle
    /// Synthetic startup event emitted once after `init`.
    Initialized,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns `true` for list scrolling messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::ScrollUp | Self::ScrollDown | Self::PageUp | Self::PageDown
        )
    }

    /// Returns `true` for focus changes and draft edits.
    #[must_use]
    pub const fn is_draft(&self) -> bool {
        matches!(
            self,
            Self::FocusDraft
                | Self::FocusList
                | Self::DraftChanged(_)
                | Self::DraftInsertChar(_)
                | Self::DraftBackspace
        )
    }

    /// Returns `true` for list fetch requests and results.
    #[must_use]
    pub const fn is_fetch(&self) -> bool {
        matches!(
            self,
            Self::RefreshRequested | Self::MessagesLoaded { .. } | Self::MessagesFailed { .. }
        )
    }

    /// Returns `true` for submissions and their results.
    #[must_use]
    pub const fn is_post(&self) -> bool {
        matches!(
            self,
            Self::SubmitRequested | Self::PostCompleted { .. } | Self::PostFailed(_)
        )
    }
}
