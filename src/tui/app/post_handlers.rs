//! Submission handlers for the board TUI.
//!
//! The posting flag serialises submissions: a submit while one is in flight
//! is ignored. A decoded server verdict clears the draft and reloads the
//! list; a transport or decoding failure keeps the draft and does not
//! reload.

use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use bubbletea_rs::Cmd;

use super::{BoardApp, GATEWAY_MISSING};
use crate::api::{MessageGateway, NewMessage, PostOutcome};
use crate::telemetry::elapsed_millis;
use crate::tui::messages::AppMsg;
use crate::tui::state::PostingState;

impl BoardApp {
    /// Dispatches submission messages to their handlers.
    pub(super) fn handle_post_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::SubmitRequested => self.handle_submit_requested(),
            AppMsg::PostCompleted {
                outcome,
                latency_ms,
            } => self.handle_post_completed(outcome, *latency_ms),
            AppMsg::PostFailed(error) => {
                self.handle_post_failed(error);
                None
            }
            _ => {
                debug_assert!(false, "non-post message routed to handle_post_msg");
                None
            }
        }
    }

    fn handle_submit_requested(&mut self) -> Option<Cmd> {
        if self.posting.is_posting() {
            tracing::debug!("submit ignored while a post is in flight");
            return None;
        }

        self.posting = PostingState::Posting;
        let message = NewMessage {
            nickname: self.nickname.clone(),
            body: self.draft.text().to_owned(),
        };
        Some(post_cmd(self.gateway.clone(), message))
    }

    fn handle_post_completed(&mut self, outcome: &PostOutcome, latency_ms: u64) -> Option<Cmd> {
        self.posting = PostingState::Idle;
        crate::tui::record_post_telemetry(latency_ms, !outcome.is_rejected());

        if !outcome.is_accepted() {
            tracing::info!("post rejected: {:?}", outcome.message);
            self.post_error.clone_from(&outcome.message);
        }

        self.draft.clear();
        self.start_fetch()
    }

    fn handle_post_failed(&mut self, error: &str) {
        tracing::warn!("post failed: {error}");
        self.posting = PostingState::Idle;
        self.post_error = Some(error.to_owned());
    }
}

/// Creates a command that submits `message` and reports the verdict.
fn post_cmd(gateway: Option<Arc<dyn MessageGateway>>, message: NewMessage) -> Cmd {
    Box::pin(async move {
        let Some(gateway) = gateway else {
            return Some(
                Box::new(AppMsg::PostFailed(GATEWAY_MISSING.to_owned())) as Box<dyn Any + Send>
            );
        };

        let start = Instant::now();
        let msg = match gateway.create_message(&message).await {
            Ok(outcome) => AppMsg::PostCompleted {
                outcome,
                latency_ms: elapsed_millis(start.elapsed()),
            },
            Err(error) => AppMsg::PostFailed(error.to_string()),
        };
        Some(Box::new(msg) as Box<dyn Any + Send>)
    })
}
