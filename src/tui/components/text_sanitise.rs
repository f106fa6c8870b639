//! Control-character filtering for text received from the board.
//!
//! Nicknames and bodies are written by anyone. ESC, BEL, CR and friends
//! must never reach the terminal, where they would act as escape sequences
//! or cursor movement instead of text.

/// Returns `text` with control characters removed.
///
/// Line feeds are kept when `keep_newlines` is set. Other whitespace
/// controls (tab, CR, line feeds in single-line text) become a space. All
/// remaining control characters, C1 included, are dropped.
#[must_use]
pub fn strip_control_chars(text: &str, keep_newlines: bool) -> String {
    text.chars()
        .filter_map(|ch| match ch {
            '\n' if keep_newlines => Some('\n'),
            _ if ch.is_control() && ch.is_whitespace() => Some(' '),
            _ if ch.is_control() => None,
            _ => Some(ch),
        })
        .collect()
}
