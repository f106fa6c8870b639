//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use msgboard::tui::components::{EMPTY_BOARD_TEXT, strip_control_chars};
use msgboard::{BoardError, Message};

/// Writes every message as a header line and its body, newest first.
///
/// Entries are separated by a blank line. An empty board prints
/// `No message`. Control characters in nicknames and bodies are stripped.
///
/// # Errors
///
/// Returns [`BoardError::Io`] when writing fails.
pub fn write_message_list<W: Write>(writer: &mut W, messages: &[Message]) -> Result<(), BoardError> {
    if messages.is_empty() {
        return writeln!(writer, "{EMPTY_BOARD_TEXT}").map_err(|e| io_error(&e));
    }

    for (index, message) in messages.iter().enumerate() {
        if index > 0 {
            writeln!(writer).map_err(|e| io_error(&e))?;
        }
        writeln!(
            writer,
            "{}  {}",
            strip_control_chars(&message.nickname, false),
            message.display_timestamp()
        )
        .map_err(|e| io_error(&e))?;
        writeln!(writer, "{}", strip_control_chars(&message.body, true))
            .map_err(|e| io_error(&e))?;
    }

    Ok(())
}

/// Converts an I/O error to a [`BoardError::Io`].
pub(crate) fn io_error(error: &io::Error) -> BoardError {
    BoardError::Io {
        message: error.to_string(),
    }
}
