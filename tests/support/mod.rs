//! Shared test utilities.

use std::any::Any;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use bubbletea_rs::Cmd;
use msgboard::tui::messages::AppMsg;
use msgboard::{BoardEndpoint, BoardError, MessageGateway, ReqwestMessageGateway};
use wiremock::MockServer;

/// Builds a shared gateway that talks to `server`.
///
/// # Errors
///
/// Returns an error if the server URI cannot be parsed or the HTTP client
/// cannot be built.
pub fn gateway_for(server: &MockServer) -> Result<Arc<dyn MessageGateway>, BoardError> {
    let endpoint = BoardEndpoint::parse(&server.uri())?;
    let gateway = ReqwestMessageGateway::new(endpoint, Duration::from_secs(5))?;
    Ok(Arc::new(gateway))
}

/// Builds a gateway pointing at a local port nothing listens on.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn unreachable_gateway() -> Result<Arc<dyn MessageGateway>, BoardError> {
    let endpoint = BoardEndpoint::parse("http://127.0.0.1:1")?;
    let gateway = ReqwestMessageGateway::new(endpoint, Duration::from_secs(2))?;
    Ok(Arc::new(gateway))
}

/// Runs a command and returns the application message it produced.
///
/// # Errors
///
/// Returns an error if the command produced no message or a message of
/// another type.
pub async fn run_cmd(cmd: Cmd) -> Result<AppMsg, io::Error> {
    let msg: Box<dyn Any + Send> = cmd
        .await
        .ok_or_else(|| io::Error::other("command produced no message"))?;
    msg.downcast::<AppMsg>()
        .map(|app_msg| *app_msg)
        .map_err(|_| io::Error::other("command produced a non-AppMsg message"))
}
