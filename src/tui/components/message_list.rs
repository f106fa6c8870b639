//! Scrollable list of message cards.

use crate::api::Message;

use super::message_card::{MessageCardComponent, MessageCardViewContext};

/// Text shown when the board has no messages.
pub const EMPTY_BOARD_TEXT: &str = "No message";

/// Context for rendering the message list.
#[derive(Debug, Clone, Copy)]
pub struct MessageListViewContext<'a> {
    /// Messages in the order the server returned them.
    pub messages: &'a [Message],
    /// Number of rendered lines scrolled past.
    pub scroll_offset: usize,
    /// Maximum number of lines to show.
    pub visible_height: usize,
    /// Maximum line width in terminal columns.
    pub max_width: usize,
}

/// Renders one card per message, in received order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageListComponent;

impl MessageListComponent {
    /// Renders every card as a flat list of lines.
    #[must_use]
    pub fn all_lines(messages: &[Message], max_width: usize) -> Vec<String> {
        messages
            .iter()
            .flat_map(|message| {
                MessageCardComponent::lines(&MessageCardViewContext { message, max_width })
            })
            .collect()
    }

    /// Returns the largest useful scroll offset for the given layout.
    #[must_use]
    pub fn max_scroll(messages: &[Message], max_width: usize, visible_height: usize) -> usize {
        Self::all_lines(messages, max_width)
            .len()
            .saturating_sub(visible_height)
    }

    /// Renders the visible window of the list.
    #[must_use]
    pub fn view(ctx: &MessageListViewContext<'_>) -> String {
        if ctx.messages.is_empty() {
            return format!("{EMPTY_BOARD_TEXT}\n");
        }

        let mut output = String::new();
        for line in Self::all_lines(ctx.messages, ctx.max_width)
            .into_iter()
            .skip(ctx.scroll_offset)
            .take(ctx.visible_height)
        {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }
}
