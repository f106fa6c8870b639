//! One-shot mode that prints the board and exits.

use std::io::{self, Write};
use std::time::Instant;

use msgboard::telemetry::{StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink, elapsed_millis};
use msgboard::{BoardConfig, BoardError, MessageGateway};

use super::build_gateway;
use super::output::write_message_list;

/// Fetches the board once and prints it to stdout.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the fetch fails, or
/// writing to stdout fails.
pub async fn run(config: &BoardConfig) -> Result<(), BoardError> {
    let gateway = build_gateway(config)?;
    let mut stdout = io::stdout().lock();
    list_to(&gateway, &mut stdout, &StderrJsonlTelemetrySink).await
}

/// Fetches the board through `gateway` and writes it to `writer`.
pub(crate) async fn list_to<W: Write>(
    gateway: &dyn MessageGateway,
    writer: &mut W,
    telemetry: &dyn TelemetrySink,
) -> Result<(), BoardError> {
    let start = Instant::now();
    let messages = gateway.list_messages().await?;
    telemetry.record(TelemetryEvent::MessagesFetched {
        latency_ms: elapsed_millis(start.elapsed()),
        message_count: messages.len(),
    });

    write_message_list(writer, &messages)
}
