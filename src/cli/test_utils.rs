//! Shared helpers for CLI unit tests.

use std::time::Duration;

use msgboard::{BoardEndpoint, ReqwestMessageGateway};
use wiremock::MockServer;

/// Builds a gateway that talks to `server`.
pub fn gateway_for(server: &MockServer) -> ReqwestMessageGateway {
    let endpoint = BoardEndpoint::parse(&server.uri()).expect("mock server URI should parse");
    ReqwestMessageGateway::new(endpoint, Duration::from_secs(5)).expect("gateway should build")
}

/// Decodes a captured output buffer.
pub fn utf8(buffer: Vec<u8>) -> String {
    String::from_utf8(buffer).expect("output should be valid UTF-8")
}
