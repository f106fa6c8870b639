//! Startup context storage for the board TUI.
//!
//! bubbletea-rs constructs the model through the static `Model::init`, so
//! the CLI stores everything the app needs in `OnceLock` values before the
//! program starts. `BoardApp::init()` reads them back.

use std::sync::{Arc, OnceLock};

use crossterm::terminal;

use crate::api::MessageGateway;
use crate::config::{DEFAULT_MAX_LENGTH, DEFAULT_NICKNAME};
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

/// Global storage for the gateway and posting settings.
static BOARD_CONTEXT: OnceLock<BoardContext> = OnceLock::new();

/// Global storage for initial terminal dimensions.
///
/// Read by `BoardApp::init()` so the first frame uses the actual terminal
/// size.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// Global storage for the telemetry sink.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Fallback sink used when none has been configured.
static DEFAULT_TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Everything the TUI needs to talk to the board.
#[derive(Debug, Clone)]
pub struct BoardContext {
    /// Gateway used for list and create requests.
    pub gateway: Arc<dyn MessageGateway>,
    /// Author name attached to new messages.
    pub nickname: String,
    /// Draft length cap in characters.
    pub max_length: usize,
}

/// Sets the board context for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. Without
/// it, fetches and posts fail with an error shown in the UI.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_board_context(context: BoardContext) -> bool {
    BOARD_CONTEXT.set(context).is_ok()
}

/// Sets the initial terminal dimensions for the TUI application.
///
/// # Returns
///
/// `true` if the dimensions were set, `false` if they were already set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Sets the telemetry sink for the TUI application.
///
/// Without this, a no-op sink is used.
///
/// # Returns
///
/// `true` if the sink was set, `false` if it was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Returns the stored gateway, if configured.
pub(crate) fn get_gateway() -> Option<Arc<dyn MessageGateway>> {
    BOARD_CONTEXT
        .get()
        .map(|context| Arc::clone(&context.gateway))
}

/// Returns the stored nickname, or the default when unset.
pub(crate) fn get_nickname() -> String {
    BOARD_CONTEXT.get().map_or_else(
        || DEFAULT_NICKNAME.to_owned(),
        |context| context.nickname.clone(),
    )
}

/// Returns the stored draft cap, or the default when unset.
pub(crate) fn get_max_length() -> usize {
    BOARD_CONTEXT
        .get()
        .map_or(DEFAULT_MAX_LENGTH, |context| context.max_length.max(1))
}

/// Gets the initial terminal dimensions from storage.
///
/// Falls back to querying the terminal, then to 80x24.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 24;

    INITIAL_TERMINAL_SIZE
        .get()
        .copied()
        .filter(|(width, height)| *width > 0 && *height > 0)
        .or_else(|| {
            terminal::size()
                .ok()
                .filter(|(width, height)| *width > 0 && *height > 0)
        })
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}

fn get_telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK.get().cloned().unwrap_or_else(|| {
        Arc::clone(DEFAULT_TELEMETRY_SINK.get_or_init(|| Arc::new(NoopTelemetrySink)))
    })
}

/// Records telemetry for an applied list fetch.
pub(crate) fn record_fetch_telemetry(latency_ms: u64, message_count: usize) {
    get_telemetry_sink().record(TelemetryEvent::MessagesFetched {
        latency_ms,
        message_count,
    });
}

/// Records telemetry for a create request with a decoded verdict.
pub(crate) fn record_post_telemetry(latency_ms: u64, accepted: bool) {
    get_telemetry_sink().record(TelemetryEvent::MessagePosted {
        latency_ms,
        accepted,
    });
}
