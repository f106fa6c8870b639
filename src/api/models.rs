//! Data models for board messages and API payloads.

use std::fmt;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder shown when a message carries no usable timestamp.
pub const INVALID_TIMESTAMP_LABEL: &str = "Invalid Date";

/// Display format for message timestamps in the local time zone.
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Opaque message identifier as assigned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageId {
    /// Numeric identifier (the board's native form).
    Number(i64),
    /// Any other identifier, kept in its textual JSON form.
    Text(String),
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// A message fetched from the board.
///
/// Messages are immutable once fetched; the list is replaced wholesale on
/// every applied refresh.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    /// Server-assigned identifier, if present.
    pub id: Option<MessageId>,
    /// Author name.
    pub nickname: String,
    /// Message text. Only messages created by this client are length-capped.
    pub body: String,
    /// Creation time, if the server supplied a parseable one.
    pub created_at: Option<DateTime<Utc>>,
}

impl Message {
    /// Formats the creation time in the local time zone for display.
    ///
    /// Returns [`INVALID_TIMESTAMP_LABEL`] when no timestamp is available.
    #[must_use]
    pub fn display_timestamp(&self) -> String {
        self.created_at.map_or_else(
            || INVALID_TIMESTAMP_LABEL.to_owned(),
            |created_at| {
                created_at
                    .with_timezone(&Local)
                    .format(TIMESTAMP_FORMAT)
                    .to_string()
            },
        )
    }
}

/// Request body for creating a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMessage {
    /// Author name sent with the message.
    pub nickname: String,
    /// Draft text.
    pub body: String,
}

/// Server verdict returned after a create request.
///
/// The board answers either `{ok, message?}` or, on some deployments, the
/// created message itself with no `ok` field at all.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PostOutcome {
    /// The `ok` flag, if the server sent one.
    #[serde(default)]
    pub ok: Option<bool>,
    /// Human-readable reason, typically present when `ok` is false.
    #[serde(default)]
    pub message: Option<String>,
}

impl PostOutcome {
    /// Builds an outcome carrying an explicit `ok` flag.
    #[must_use]
    pub fn new(ok: bool, message: Option<&str>) -> Self {
        Self {
            ok: Some(ok),
            message: message.map(str::to_owned),
        }
    }

    /// Returns `true` only when the server sent `ok: true`.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self.ok, Some(true))
    }

    /// Returns `true` when the server refused the message.
    ///
    /// That is an explicit `ok: false`, or a missing `ok` alongside a
    /// `message`. A reply with neither is the created message echoed back.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        match self.ok {
            Some(ok) => !ok,
            None => self.message.is_some(),
        }
    }
}

/// Wire shape of a listed message.
///
/// Fields are decoded loosely so that messages created by other clients
/// (numeric bodies, string timestamps, missing fields) still render.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiMessage {
    #[serde(default)]
    pub(crate) id: Value,
    #[serde(default)]
    pub(crate) nickname: Value,
    #[serde(default)]
    pub(crate) body: Value,
    #[serde(default, rename = "createdAt")]
    pub(crate) created_at: Value,
}

impl From<ApiMessage> for Message {
    fn from(value: ApiMessage) -> Self {
        Self {
            id: parse_id(value.id),
            nickname: value_to_text(value.nickname),
            body: value_to_text(value.body),
            created_at: parse_timestamp(&value.created_at),
        }
    }
}

fn parse_id(value: Value) -> Option<MessageId> {
    match value {
        Value::Null => None,
        Value::Number(number) => Some(
            number
                .as_i64()
                .map_or_else(|| MessageId::Text(number.to_string()), MessageId::Number),
        ),
        Value::String(text) => Some(MessageId::Text(text)),
        other => Some(MessageId::Text(other.to_string())),
    }
}

fn value_to_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    }
}

/// Accepts epoch milliseconds or an RFC 3339 string.
fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis),
        Value::String(text) => DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|parsed| parsed.with_timezone(&Utc)),
        _ => None,
    }
}
