//! One-shot mode that posts a single message and exits.

use std::io::{self, Write};
use std::time::Instant;

use msgboard::telemetry::{StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink, elapsed_millis};
use msgboard::tui::components::strip_control_chars;
use msgboard::tui::state::DraftState;
use msgboard::{BoardConfig, BoardError, MessageGateway, NewMessage};

use super::build_gateway;
use super::output::io_error;

/// Posts the configured text and prints the server's verdict.
///
/// # Errors
///
/// Returns [`BoardError::Validation`] when the text exceeds the length cap
/// or the server rejects it, and other errors for configuration, network,
/// and output failures.
pub async fn run(config: &BoardConfig) -> Result<(), BoardError> {
    let request = PostRequest {
        nickname: config.require_nickname()?,
        text: config.require_post_text()?,
        max_length: config.require_max_length()?,
    };
    let gateway = build_gateway(config)?;
    let mut stdout = io::stdout().lock();
    post_to(&gateway, &request, &mut stdout, &StderrJsonlTelemetrySink).await
}

/// Inputs for a single post.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PostRequest<'a> {
    pub nickname: &'a str,
    pub text: &'a str,
    pub max_length: usize,
}

/// Validates and posts `request` through `gateway`, writing the verdict.
pub(crate) async fn post_to<W: Write>(
    gateway: &dyn MessageGateway,
    request: &PostRequest<'_>,
    writer: &mut W,
    telemetry: &dyn TelemetrySink,
) -> Result<(), BoardError> {
    let mut draft = DraftState::new(request.max_length);
    draft
        .propose(request.text.to_owned())
        .map_err(|error| BoardError::Validation {
            message: error.to_string(),
        })?;

    let message = NewMessage {
        nickname: request.nickname.to_owned(),
        body: draft.text().to_owned(),
    };

    let start = Instant::now();
    let outcome = gateway.create_message(&message).await?;
    telemetry.record(TelemetryEvent::MessagePosted {
        latency_ms: elapsed_millis(start.elapsed()),
        accepted: !outcome.is_rejected(),
    });

    if outcome.is_rejected() {
        let reason = outcome
            .message
            .as_deref()
            .map_or_else(|| "the server gave no reason".to_owned(), |message| {
                strip_control_chars(message, false)
            });
        return Err(BoardError::Validation { message: reason });
    }

    writeln!(writer, "Message posted as {}.", request.nickname).map_err(|e| io_error(&e))
}
