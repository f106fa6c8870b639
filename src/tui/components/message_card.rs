//! Renderer for a single board message.

use crate::api::Message;

use super::text_sanitise::strip_control_chars;
use super::text_wrap::wrap_text;

/// Indentation applied to body lines beneath the header.
const BODY_INDENT: &str = "  ";

/// Context for rendering one message card.
#[derive(Debug, Clone, Copy)]
pub struct MessageCardViewContext<'a> {
    /// The message to render.
    pub message: &'a Message,
    /// Maximum line width in terminal columns.
    pub max_width: usize,
}

/// Stateless renderer showing a message's author, timestamp, and body.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageCardComponent;

impl MessageCardComponent {
    /// Renders the card as lines without trailing newlines.
    ///
    /// The first line holds the author and local timestamp; body lines follow
    /// indented and wrapped to `max_width`; a blank separator ends the card.
    /// Control characters are stripped, so every returned line is exactly
    /// one terminal row.
    #[must_use]
    pub fn lines(ctx: &MessageCardViewContext<'_>) -> Vec<String> {
        let message = ctx.message;
        let mut lines = vec![format!(
            "{}  {}",
            strip_control_chars(&message.nickname, false),
            message.display_timestamp()
        )];

        let body = strip_control_chars(&message.body, true);
        let body_width = ctx.max_width.saturating_sub(BODY_INDENT.len()).max(1);
        lines.extend(
            wrap_text(&body, body_width)
                .into_iter()
                .map(|line| format!("{BODY_INDENT}{line}")),
        );
        lines.push(String::new());
        lines
    }

    /// Renders the card as a newline-terminated string.
    #[must_use]
    pub fn view(ctx: &MessageCardViewContext<'_>) -> String {
        let mut output = Self::lines(ctx).join("\n");
        output.push('\n');
        output
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Local, Utc};

    use super::{MessageCardComponent, MessageCardViewContext};
    use crate::api::{Message, MessageId};

    fn message(body: &str) -> Message {
        Message {
            id: Some(MessageId::Number(7)),
            nickname: "alice".to_owned(),
            body: body.to_owned(),
            created_at: DateTime::<Utc>::from_timestamp_millis(1_700_000_000_000),
        }
    }

    #[test]
    fn card_shows_author_local_timestamp_and_body() {
        let message = message("hello board");
        let expected_time = DateTime::<Utc>::from_timestamp_millis(1_700_000_000_000)
            .map(|time| time.with_timezone(&Local).format("%Y/%m/%d %H:%M:%S").to_string())
            .unwrap_or_default();

        let lines = MessageCardComponent::lines(&MessageCardViewContext {
            message: &message,
            max_width: 80,
        });

        assert_eq!(
            lines,
            vec![
                format!("alice  {expected_time}"),
                "  hello board".to_owned(),
                String::new(),
            ]
        );
    }

    #[test]
    fn missing_timestamp_renders_invalid_date() {
        let message = Message {
            created_at: None,
            ..message("x")
        };

        let view = MessageCardComponent::view(&MessageCardViewContext {
            message: &message,
            max_width: 80,
        });

        assert!(view.starts_with("alice  Invalid Date\n"), "got {view:?}");
    }

    #[test]
    fn control_characters_never_reach_card_lines() {
        let message = Message {
            nickname: "mallory\u{1b}]0;pwned\u{7}\nsecond".to_owned(),
            created_at: None,
            ..message("\u{1b}[2J\u{1b}[31mred\rX")
        };

        let lines = MessageCardComponent::lines(&MessageCardViewContext {
            message: &message,
            max_width: 80,
        });

        assert_eq!(
            lines,
            vec![
                "mallory]0;pwned second  Invalid Date".to_owned(),
                "  [2J[31mred X".to_owned(),
                String::new(),
            ]
        );
    }

    #[test]
    fn long_body_wraps_within_width() {
        let message = message("one two three four five six seven eight nine ten");

        let lines = MessageCardComponent::lines(&MessageCardViewContext {
            message: &message,
            max_width: 20,
        });

        assert!(lines.len() > 3, "body should wrap: {lines:?}");
        for line in lines.iter().skip(1) {
            assert!(line.chars().count() <= 20, "line too wide: {line:?}");
        }
    }
}
