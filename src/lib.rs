//! msgboard library crate: a terminal client for a JSON message board.
//!
//! The library resolves the board API endpoint, lists and posts messages
//! through a trait-based gateway, and drives an interactive TUI in which
//! drafts are capped at a configurable length.

pub mod api;
pub mod config;
pub mod telemetry;
pub mod tui;

pub use api::{
    BoardEndpoint, BoardError, Message, MessageGateway, MessageId, NewMessage, PostOutcome,
    ReqwestMessageGateway,
};
pub use config::{BoardConfig, OperationMode};
pub use telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink};
