//! Rendering logic for the board TUI application.
//!
//! These are pure query methods that read state without modification.

use super::BoardApp;
use crate::tui::components::{
    MessageListComponent, MessageListViewContext, strip_control_chars, wrap_text,
};
use crate::tui::state::InputFocus;

/// Prefix for the fetch-error line.
pub(super) const FETCH_ERROR_PREFIX: &str = "Something went wrong. ";

/// Text shown while a post is in flight.
pub(super) const LOADING_TEXT: &str = "Loading...";

/// Marker in front of the first draft row.
const DRAFT_PREFIX: &str = "> ";

/// Indent for wrapped draft rows.
const DRAFT_CONTINUATION: &str = "  ";

impl BoardApp {
    /// Renders the main screen: everything above the list, the list, and
    /// the status bar.
    pub(super) fn render_main_view(&self) -> String {
        let mut output = self.render_top();

        let list_ctx = MessageListViewContext {
            messages: &self.messages,
            scroll_offset: self.scroll_offset,
            visible_height: self.list_height(),
            max_width: self.content_width(),
        };
        output.push_str(&MessageListComponent::view(&list_ctx));
        output.push_str(&self.render_status_bar());
        output
    }

    /// Renders the title, loading line, input box, and error slots.
    fn render_top(&self) -> String {
        let mut output = String::from("Message Board\n");

        if self.posting.is_posting() {
            output.push_str(LOADING_TEXT);
            output.push('\n');
        }

        output.push_str(&self.render_input());

        if let Some(error) = self.post_error.as_deref().filter(|error| !error.is_empty()) {
            output.push_str(error);
            output.push('\n');
        }

        if let Some(error) = &self.fetch_error {
            output.push_str(FETCH_ERROR_PREFIX);
            output.push_str(error);
            output.push('\n');
        }

        output.push('\n');
        output
    }

    /// Renders the input box with its character counter.
    ///
    /// The draft wraps over as many rows as it needs so its end and the
    /// cursor stay visible; the counter sits on its own row below.
    fn render_input(&self) -> String {
        let (label, cursor) = match self.focus {
            InputFocus::Draft => ("Message (Enter:post  Esc:done)", "_"),
            InputFocus::List => ("Message (Tab or i:write)", ""),
        };

        let text = strip_control_chars(self.draft.text(), false);
        let wrap_width = self
            .content_width()
            .saturating_sub(DRAFT_PREFIX.len() + cursor.len())
            .max(1);
        let mut rows = wrap_text(&text, wrap_width);
        if rows.is_empty() {
            rows.push(String::new());
        }

        let mut output = format!("{label}\n");
        let last = rows.len().saturating_sub(1);
        for (index, row) in rows.iter().enumerate() {
            let prefix = if index == 0 { DRAFT_PREFIX } else { DRAFT_CONTINUATION };
            let row_cursor = if index == last { cursor } else { "" };
            output.push_str(prefix);
            output.push_str(row);
            output.push_str(row_cursor);
            output.push('\n');
        }

        let counter = format!(
            "[{count}/{max}]\n",
            count = self.draft.char_count(),
            max = self.draft.max_length(),
        );
        output.push_str(&counter);
        output
    }

    /// Renders the status bar with key hints.
    fn render_status_bar(&self) -> String {
        let hints = match self.focus {
            InputFocus::Draft => "Enter:post  Backspace:delete  Esc:back  Ctrl+C:quit",
            InputFocus::List => "j/k:scroll  Tab:write  r:refresh  ?:help  q:quit",
        };
        format!("{hints}\n")
    }

    /// Returns the number of rows left for the message list.
    pub(super) fn list_height(&self) -> usize {
        let top_lines = self.render_top().lines().count();
        let status_lines = 1;
        (self.height as usize)
            .saturating_sub(top_lines + status_lines)
            .max(1)
    }

    /// Returns the usable line width, one column short of the terminal to
    /// avoid autowrap.
    pub(super) fn content_width(&self) -> usize {
        (self.width as usize).saturating_sub(1).max(1)
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay() -> String {
        let help_text = r"
=== Keyboard Shortcuts ===

Message list:
  j, Down    Scroll down
  k, Up      Scroll up
  PgDn       Page down
  PgUp       Page up
  r          Reload messages
  Tab, i     Write a message
  ?          Toggle this help
  q          Quit

Writing:
  text keys  Edit message
  Backspace  Delete one character
  Enter      Post message
  Esc, Tab   Back to message list
  Ctrl+C     Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}
