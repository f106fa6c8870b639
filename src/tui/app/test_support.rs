//! Shared helpers for `BoardApp` unit tests.

use std::sync::Arc;

use bubbletea_rs::Cmd;

use super::BoardApp;
use crate::api::gateway::MockMessageGateway;
use crate::api::{Message, MessageId};
use crate::tui::messages::AppMsg;

/// Three messages in newest-first order.
pub(super) fn sample_messages() -> Vec<Message> {
    [(3, "carol", "third"), (2, "bob", "second"), (1, "alice", "first")]
        .into_iter()
        .map(|(id, nickname, body)| Message {
            id: Some(MessageId::Number(id)),
            nickname: nickname.to_owned(),
            body: body.to_owned(),
            created_at: None,
        })
        .collect()
}

/// Builds an app wired to `gateway`.
pub(super) fn app_with_gateway(gateway: MockMessageGateway) -> BoardApp {
    BoardApp::empty().with_gateway(Arc::new(gateway))
}

/// Runs a command and returns the application message it produced.
pub(super) async fn run_cmd(cmd: Cmd) -> AppMsg {
    let msg = cmd.await.expect("command should produce a message");
    *msg
        .downcast::<AppMsg>()
        .expect("command should produce an AppMsg")
}

/// Returns the nickname of every message shown, in order.
pub(super) fn shown_nicknames(app: &BoardApp) -> Vec<String> {
    app.messages()
        .iter()
        .map(|message| message.nickname.clone())
        .collect()
}
