//! Posting flag guarding against concurrent submissions.

/// Whether a create request is currently in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PostingState {
    /// No submission is running.
    #[default]
    Idle,
    /// A submission has started and has not completed.
    Posting,
}

impl PostingState {
    /// Returns `true` while a submission is in flight.
    #[must_use]
    pub const fn is_posting(self) -> bool {
        matches!(self, Self::Posting)
    }
}
