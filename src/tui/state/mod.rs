//! State types for the message board TUI.
//!
//! Holds the draft text, posting flag, input focus, and fetch ordering.

mod draft;
mod fetch_sequence;
mod focus;
mod posting;

pub use draft::{DraftError, DraftState};
pub use fetch_sequence::FetchSequence;
pub use focus::InputFocus;
pub use posting::PostingState;
