//! Scroll handling for the message list.
//!
//! The list scrolls by rendered line rather than by message, since wrapped
//! bodies give cards different heights.

use bubbletea_rs::Cmd;

use super::BoardApp;
use crate::tui::components::MessageListComponent;
use crate::tui::messages::AppMsg;

impl BoardApp {
    /// Dispatches navigation messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::ScrollUp => self.scroll_up(1),
            AppMsg::ScrollDown => self.scroll_down(1),
            AppMsg::PageUp => self.scroll_up(self.list_height()),
            AppMsg::PageDown => self.scroll_down(self.list_height()),
            _ => {
                debug_assert!(
                    false,
                    "non-navigation message routed to handle_navigation_msg"
                );
            }
        }
        None
    }

    const fn scroll_up(&mut self, step: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(step);
    }

    fn scroll_down(&mut self, step: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(step).min(self.max_scroll());
    }

    /// Pulls the scroll offset back inside the rendered list.
    ///
    /// Call after the message list or terminal size changes.
    pub(super) fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    fn max_scroll(&self) -> usize {
        MessageListComponent::max_scroll(&self.messages, self.content_width(), self.list_height())
    }
}
