//! Tests for the reqwest message gateway.

use std::time::Duration;

use rstest::rstest;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{MessageGateway, ReqwestMessageGateway};
use crate::api::endpoint::BoardEndpoint;
use crate::api::error::BoardError;
use crate::api::models::{MessageId, NewMessage};

fn gateway_for(server: &MockServer) -> ReqwestMessageGateway {
    let endpoint = BoardEndpoint::parse(&server.uri()).expect("mock server URI should parse");
    ReqwestMessageGateway::new(endpoint, Duration::from_secs(5)).expect("gateway should build")
}

fn new_message(body: &str) -> NewMessage {
    NewMessage {
        nickname: "User Pei".to_owned(),
        body: body.to_owned(),
    }
}

#[rstest]
#[tokio::test]
async fn list_messages_requests_newest_first_and_preserves_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/comments"))
        .and(query_param("_sort", "createdAt"))
        .and(query_param("_order", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 3, "nickname": "carol", "body": "third", "createdAt": 1_700_000_300_000_i64 },
            { "id": 2, "nickname": "bob", "body": "second", "createdAt": 1_700_000_200_000_i64 },
            { "id": 1, "nickname": "alice", "body": "first", "createdAt": 1_700_000_100_000_i64 }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let messages = gateway_for(&server)
        .list_messages()
        .await
        .expect("list should succeed");

    let ids: Vec<_> = messages.iter().filter_map(|message| message.id.clone()).collect();
    assert_eq!(
        ids,
        vec![MessageId::Number(3), MessageId::Number(2), MessageId::Number(1)]
    );
    assert_eq!(
        messages.first().map(|message| message.nickname.as_str()),
        Some("carol")
    );
}

#[rstest]
#[tokio::test]
async fn list_messages_accepts_empty_board() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let messages = gateway_for(&server)
        .list_messages()
        .await
        .expect("list should succeed");

    assert!(messages.is_empty());
}

#[rstest]
#[case::html_body(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))]
#[case::object_instead_of_array(
    ResponseTemplate::new(200).set_body_json(json!({ "ok": false, "message": "nope" }))
)]
#[tokio::test]
async fn list_messages_reports_unexpected_bodies_as_decode_errors(
    #[case] response: ResponseTemplate,
) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/comments"))
        .respond_with(response)
        .mount(&server)
        .await;

    let result = gateway_for(&server).list_messages().await;

    assert!(
        matches!(result, Err(BoardError::Decode { .. })),
        "expected decode error, got {result:?}"
    );
}

#[rstest]
#[tokio::test]
async fn list_messages_reports_unreachable_server_as_network_error() {
    let endpoint =
        BoardEndpoint::parse("http://127.0.0.1:1").expect("loopback URL should parse");
    let gateway =
        ReqwestMessageGateway::new(endpoint, Duration::from_secs(2)).expect("gateway should build");

    let result = gateway.list_messages().await;

    assert!(
        matches!(result, Err(BoardError::Network { .. })),
        "expected network error, got {result:?}"
    );
}

#[rstest]
#[tokio::test]
async fn create_message_posts_json_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/comments"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "nickname": "User Pei", "body": "hello" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = gateway_for(&server)
        .create_message(&new_message("hello"))
        .await
        .expect("post should succeed");

    assert!(outcome.is_accepted());
    assert!(outcome.message.is_none());
}

#[rstest]
#[tokio::test]
async fn create_message_returns_server_rejection_as_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/comments"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "ok": false, "message": "too long" })),
        )
        .mount(&server)
        .await;

    let outcome = gateway_for(&server)
        .create_message(&new_message("x"))
        .await
        .expect("rejections are still decoded");

    assert!(outcome.is_rejected());
    assert_eq!(outcome.message.as_deref(), Some("too long"));
}

#[rstest]
#[tokio::test]
async fn create_message_reports_non_json_body_as_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/comments"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let result = gateway_for(&server).create_message(&new_message("x")).await;

    assert!(
        matches!(result, Err(BoardError::Decode { .. })),
        "expected decode error, got {result:?}"
    );
}
