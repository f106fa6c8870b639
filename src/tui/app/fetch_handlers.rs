//! List loading handlers for the board TUI.
//!
//! Every fetch is tagged with a sequence number when issued. A result is
//! applied only if it is newer than the last applied one, so a slow
//! response can never overwrite fresher data.

use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use bubbletea_rs::Cmd;

use super::{BoardApp, GATEWAY_MISSING};
use crate::api::{Message, MessageGateway};
use crate::telemetry::elapsed_millis;
use crate::tui::messages::AppMsg;

impl BoardApp {
    /// Dispatches list fetch messages to their handlers.
    pub(super) fn handle_fetch_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::RefreshRequested => self.start_fetch(),
            AppMsg::MessagesLoaded {
                seq,
                messages,
                latency_ms,
            } => {
                self.handle_messages_loaded(*seq, messages, *latency_ms);
                None
            }
            AppMsg::MessagesFailed { seq, error } => {
                self.handle_messages_failed(*seq, error);
                None
            }
            _ => {
                debug_assert!(false, "non-fetch message routed to handle_fetch_msg");
                None
            }
        }
    }

    /// Issues a new list fetch and returns the command that performs it.
    #[expect(
        clippy::unnecessary_wraps,
        reason = "Returns Option<Cmd> for consistency with other message handlers"
    )]
    pub(super) fn start_fetch(&mut self) -> Option<Cmd> {
        let seq = self.fetch_sequence.issue();
        tracing::debug!("issuing list fetch {seq}");
        Some(fetch_cmd(self.gateway.clone(), seq))
    }

    /// Replaces the whole list when the result is the newest seen.
    ///
    /// An earlier fetch error stays visible after a successful fetch.
    fn handle_messages_loaded(&mut self, seq: u64, messages: &[Message], latency_ms: u64) {
        if !self.fetch_sequence.accept(seq) {
            tracing::debug!("discarding stale list fetch {seq}");
            return;
        }

        self.messages = messages.to_vec();
        self.clamp_scroll();
        crate::tui::record_fetch_telemetry(latency_ms, self.messages.len());
    }

    /// Records a fetch failure, leaving the current list untouched.
    fn handle_messages_failed(&mut self, seq: u64, error: &str) {
        if !self.fetch_sequence.accept(seq) {
            tracing::debug!("discarding stale list fetch failure {seq}");
            return;
        }

        tracing::warn!("list fetch {seq} failed: {error}");
        self.fetch_error = Some(error.to_owned());
    }
}

/// Creates a command that lists messages and reports the tagged result.
fn fetch_cmd(gateway: Option<Arc<dyn MessageGateway>>, seq: u64) -> Cmd {
    Box::pin(async move {
        let Some(gateway) = gateway else {
            return Some(Box::new(AppMsg::MessagesFailed {
                seq,
                error: GATEWAY_MISSING.to_owned(),
            }) as Box<dyn Any + Send>);
        };

        let start = Instant::now();
        let msg = match gateway.list_messages().await {
            Ok(messages) => AppMsg::MessagesLoaded {
                seq,
                messages,
                latency_ms: elapsed_millis(start.elapsed()),
            },
            Err(error) => AppMsg::MessagesFailed {
                seq,
                error: error.to_string(),
            },
        };
        Some(Box::new(msg) as Box<dyn Any + Send>)
    })
}
