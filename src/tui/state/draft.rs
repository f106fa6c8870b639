//! Draft state for the new-message input.
//!
//! Every edit proposes a complete replacement value. Proposals longer than
//! the configured cap are rejected outright; the draft is never truncated.

use thiserror::Error;

/// Editable text of the message being composed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftState {
    text: String,
    max_length: usize,
}

impl DraftState {
    /// Creates an empty draft capped at `max_length` characters.
    #[must_use]
    pub fn new(max_length: usize) -> Self {
        debug_assert!(
            max_length >= 1,
            "draft max_length must be validated before state creation"
        );
        Self {
            text: String::new(),
            max_length,
        }
    }

    /// Returns the current draft text.
    #[must_use]
    pub const fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Returns the configured maximum character count.
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    /// Returns the current character count using Unicode scalar values.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Replaces the draft with `candidate` if it fits within the cap.
    ///
    /// Length is counted in Unicode scalar values, not UTF-16 code units.
    /// Characters outside the Basic Multilingual Plane (most emoji) count
    /// once here but twice for a server that measures UTF-16, so such a
    /// server may still refuse a draft this check accepts.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::LengthExceeded`] when `candidate` is longer than
    /// the cap. The draft keeps its previous value.
    pub fn propose(&mut self, candidate: String) -> Result<(), DraftError> {
        let attempted = candidate.chars().count();
        if attempted > self.max_length {
            return Err(DraftError::LengthExceeded {
                attempted,
                max_length: self.max_length,
            });
        }

        self.text = candidate;
        Ok(())
    }

    /// Returns the value the draft would hold after typing `character`.
    #[must_use]
    pub fn with_char(&self, character: char) -> String {
        let mut candidate = self.text.clone();
        candidate.push(character);
        candidate
    }

    /// Returns the value the draft would hold after one backspace.
    #[must_use]
    pub fn without_last_char(&self) -> String {
        let mut candidate = self.text.clone();
        let _ = candidate.pop();
        candidate
    }

    /// Empties the draft.
    pub fn clear(&mut self) {
        self.text.clear();
    }
}

/// Errors raised when a proposed draft value is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DraftError {
    /// The proposed text exceeds the configured character limit.
    #[error("draft length {attempted} exceeds configured limit {max_length}")]
    LengthExceeded {
        /// Character count of the rejected proposal.
        attempted: usize,
        /// Configured maximum character count.
        max_length: usize,
    },
}
