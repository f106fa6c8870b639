//! Terminal User Interface for reading and posting board messages.
//!
//! This module provides an interactive TUI built on the bubbletea-rs
//! framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::BoardApp`]
//! - **View**: Rendering in `BoardApp::view()` and the stateless components
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Draft, posting, focus, and fetch ordering state
//! - [`components`]: Message card and list renderers
//! - [`input`]: Focus-aware key-to-message mapping
//!
//! # Startup Context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the gateway and posting settings are stored at module level.
//! Call [`set_board_context`] before starting the program and
//! `BoardApp::init()` will pick it up.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;
mod storage;

pub use app::BoardApp;
pub use storage::{
    BoardContext, set_board_context, set_initial_terminal_size, set_telemetry_sink,
};
pub(crate) use storage::{
    get_gateway, get_initial_terminal_size, get_max_length, get_nickname, record_fetch_telemetry,
    record_post_telemetry,
};
