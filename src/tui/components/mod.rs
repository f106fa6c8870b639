//! UI components for the message board TUI.
//!
//! Components are stateless renderers; the application model owns all
//! state and passes it in through view contexts.

mod message_card;
mod message_list;
mod text_sanitise;
mod text_wrap;

pub use message_card::{MessageCardComponent, MessageCardViewContext};
pub use message_list::{EMPTY_BOARD_TEXT, MessageListComponent, MessageListViewContext};
pub use text_sanitise::strip_control_chars;
pub use text_wrap::wrap_text;
