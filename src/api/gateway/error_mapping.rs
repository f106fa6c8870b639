//! Error mapping helpers for the reqwest gateway.

use http::StatusCode;

use crate::api::error::BoardError;

/// Longest response excerpt quoted in decode errors.
const BODY_EXCERPT_CHARS: usize = 80;

pub(super) fn map_transport_error(operation: &str, error: &reqwest::Error) -> BoardError {
    if error.is_timeout() {
        return BoardError::Network {
            message: format!("{operation} timed out"),
        };
    }

    if error.is_decode() {
        return BoardError::Decode {
            message: format!("{operation} failed: {error}"),
        };
    }

    BoardError::Network {
        message: format!("{operation} failed: {error}"),
    }
}

pub(super) fn map_decode_error(
    operation: &str,
    status: StatusCode,
    body: &str,
    error: &serde_json::Error,
) -> BoardError {
    let excerpt = excerpt(body);
    BoardError::Decode {
        message: format!("{operation} returned {status} with unreadable body ({error}): {excerpt}"),
    }
}

fn excerpt(body: &str) -> String {
    let mut chars = body
        .trim()
        .chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch });
    let mut output: String = chars.by_ref().take(BODY_EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        output.push_str("...");
    }
    output
}
