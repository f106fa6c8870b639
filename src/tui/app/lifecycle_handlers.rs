//! Lifecycle and window handlers for the board TUI.
//!
//! This module handles startup initialisation, terminal resize events, and
//! high-level lifecycle messages such as quit and help toggling.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::BoardApp;
use crate::tui::messages::AppMsg;

impl BoardApp {
    /// Dispatches lifecycle and window messages to their handlers.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Initialized => self.handle_initialized(),
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.handle_resize(*width, *height);
                None
            }
            _ => {
                debug_assert!(
                    false,
                    "non-lifecycle message routed to handle_lifecycle_msg"
                );
                None
            }
        }
    }

    /// Handles the synthetic startup message.
    ///
    /// `Initialized` is a one-shot event: the first one loads the board and
    /// later ones are ignored.
    fn handle_initialized(&mut self) -> Option<Cmd> {
        if self.has_initialized {
            return None;
        }

        self.has_initialized = true;
        self.start_fetch()
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.clamp_scroll();
    }

    /// Creates a command that emits `Initialized` immediately.
    ///
    /// This synthetic startup event triggers the first render cycle and the
    /// initial fetch without waiting for user input.
    pub(super) fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) })
    }
}
