//! Resolving the gateway from axum handlers.

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{TestHarness, EMAIL};
use pagseguro_client::SdkError;
use pagseguro_provider::AppConfig;

#[tokio::test]
async fn handler_receives_configured_gateway() {
    let harness = TestHarness::new();

    let response = harness.server.get("/merchant").await;

    response.assert_status_ok();
    assert_eq!(response.text(), EMAIL);
}

#[tokio::test]
async fn requests_share_the_singleton_session() {
    let harness = TestHarness::new();
    harness.sdk.push_card_flag(Ok(Some("visa".into())));
    harness.sdk.push_card_flag(Ok(Some("elo".into())));

    let first = harness.server.get("/card-flag/4111111111111111").await;
    let second = harness.server.get("/card-flag/6362970000457013").await;

    assert_eq!(first.json::<Value>(), json!({"flag": "visa"}));
    assert_eq!(second.json::<Value>(), json!({"flag": "elo"}));
    assert_eq!(harness.sdk.session_fetches(), 1);
    assert!(harness.state.gateway().unwrap().has_session().await);
}

#[tokio::test]
async fn stale_session_is_recovered_within_a_request() {
    let harness = TestHarness::new();
    harness.sdk.push_card_flag(Err(SdkError::stale_session()));
    harness.sdk.push_card_flag(Ok(Some("visa".into())));

    let response = harness.server.get("/card-flag/4111111111111111").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({"flag": "visa"}));
    assert_eq!(harness.sdk.session_fetches(), 2);
}

#[tokio::test]
async fn misconfigured_gateway_is_an_internal_error() {
    let harness = TestHarness::with_config(AppConfig::new());

    let response = harness.server.get("/merchant").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "service_misconfigured");
    assert_eq!(body["error"]["message"], "An internal error occurred");
}
