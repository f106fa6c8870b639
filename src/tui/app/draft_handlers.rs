//! Focus and draft editing handlers for the board TUI.
//!
//! Character insertion and backspace are turned into whole proposed values
//! so every edit goes through the same length check.

use bubbletea_rs::Cmd;

use super::BoardApp;
use crate::tui::messages::AppMsg;
use crate::tui::state::InputFocus;

impl BoardApp {
    /// Dispatches focus and draft messages to their handlers.
    pub(super) fn handle_draft_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::FocusDraft => self.focus_draft(),
            AppMsg::FocusList => self.focus = InputFocus::List,
            AppMsg::DraftChanged(value) => self.propose_draft(value.clone()),
            AppMsg::DraftInsertChar(character) => {
                self.propose_draft(self.draft.with_char(*character));
            }
            AppMsg::DraftBackspace => self.propose_draft(self.draft.without_last_char()),
            _ => {
                debug_assert!(false, "non-draft message routed to handle_draft_msg");
            }
        }
        None
    }

    /// Focusing the input clears any post error.
    fn focus_draft(&mut self) {
        self.focus = InputFocus::Draft;
        self.post_error = None;
    }

    /// Edits are ignored while a post is in flight; the completed post
    /// clears the draft it sent.
    fn propose_draft(&mut self, candidate: String) {
        if self.posting.is_posting() {
            tracing::debug!("draft edit ignored while a post is in flight");
            return;
        }
        if let Err(error) = self.draft.propose(candidate) {
            tracing::debug!("draft edit rejected: {error}");
        }
    }
}
