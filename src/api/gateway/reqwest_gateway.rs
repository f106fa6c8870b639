//! Gateway for the board REST API using reqwest.

use std::time::Duration;

use async_trait::async_trait;
use http::StatusCode;
use http::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::api::endpoint::BoardEndpoint;
use crate::api::error::BoardError;
use crate::api::models::{ApiMessage, Message, NewMessage, PostOutcome};

use super::MessageGateway;
use super::error_mapping::{map_decode_error, map_transport_error};

const LIST_OPERATION: &str = "list messages";
const CREATE_OPERATION: &str = "create message";

/// Loads and submits board messages over HTTP.
#[derive(Debug, Clone)]
pub struct ReqwestMessageGateway {
    client: Client,
    endpoint: BoardEndpoint,
}

impl ReqwestMessageGateway {
    /// Creates a gateway for the given endpoint with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Configuration`] when the HTTP client cannot be
    /// built.
    pub fn new(endpoint: BoardEndpoint, timeout: Duration) -> Result<Self, BoardError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| BoardError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;
        Ok(Self { client, endpoint })
    }

    /// Returns the endpoint this gateway talks to.
    #[must_use]
    pub const fn endpoint(&self) -> &BoardEndpoint {
        &self.endpoint
    }
}

/// Reads the body and decodes it as JSON regardless of the HTTP status.
///
/// The board reports failures inside the JSON payload, so the status code is
/// only logged.
async fn decode_json<T: DeserializeOwned>(
    operation: &str,
    response: Response,
) -> Result<T, BoardError> {
    let status = response.status();
    if !status.is_success() {
        tracing::warn!("{operation} returned HTTP {status}");
    }

    let body = response
        .text()
        .await
        .map_err(|error| map_transport_error(operation, &error))?;

    serde_json::from_str(&body).map_err(|error| map_decode_error(operation, status, &body, &error))
}

fn log_status(operation: &str, status: StatusCode, count: Option<usize>) {
    match count {
        Some(count) => tracing::debug!("{operation} completed with {status}: {count} messages"),
        None => tracing::debug!("{operation} completed with {status}"),
    }
}

#[async_trait]
impl MessageGateway for ReqwestMessageGateway {
    async fn list_messages(&self) -> Result<Vec<Message>, BoardError> {
        let url = self.endpoint.list_url()?;
        tracing::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| map_transport_error(LIST_OPERATION, &error))?;
        let status = response.status();

        let messages: Vec<ApiMessage> = decode_json(LIST_OPERATION, response).await?;
        log_status(LIST_OPERATION, status, Some(messages.len()));

        Ok(messages.into_iter().map(Into::into).collect())
    }

    async fn create_message(&self, message: &NewMessage) -> Result<PostOutcome, BoardError> {
        let url = self.endpoint.comments_url()?;
        tracing::debug!("POST {url}");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(message)
            .send()
            .await
            .map_err(|error| map_transport_error(CREATE_OPERATION, &error))?;
        let status = response.status();

        let outcome: PostOutcome = decode_json(CREATE_OPERATION, response).await?;
        log_status(CREATE_OPERATION, status, None);

        Ok(outcome)
    }
}
