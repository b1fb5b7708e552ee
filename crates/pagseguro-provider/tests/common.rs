//! Common test utilities for provider integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use axum_test::TestServer;
use serde_json::{json, Value};

use pagseguro_client::testing::RecordingSdk;
use pagseguro_provider::{AppConfig, AppState, PagSeguroProvider, PagSeguroService};

/// Merchant email provided by the test configuration.
pub const EMAIL: &str = "m@x.com";

/// Merchant token provided by the test configuration.
pub const TOKEN: &str = "tok123";

/// Configuration holding the test merchant credentials.
pub fn merchant_config() -> AppConfig {
    AppConfig::new()
        .with("pagseguro.email", EMAIL)
        .with("pagseguro.token", TOKEN)
}

/// Boot application state with the PagSeguro provider over `config`.
pub fn boot(config: AppConfig, sdk: &Arc<RecordingSdk>) -> AppState {
    let provider = PagSeguroProvider::new(sdk.clone());
    AppState::boot(Arc::new(config), &[&provider])
}

/// Test harness containing everything needed for HTTP tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// The SDK double behind the gateway.
    pub sdk: Arc<RecordingSdk>,
    /// The application state the server was built with.
    pub state: AppState,
}

impl TestHarness {
    /// Create a harness with the test merchant configuration.
    pub fn new() -> Self {
        Self::with_config(merchant_config())
    }

    /// Create a harness over an arbitrary configuration.
    pub fn with_config(config: AppConfig) -> Self {
        let sdk = Arc::new(RecordingSdk::new());
        let state = boot(config, &sdk);
        let server = TestServer::new(router(state.clone())).expect("Failed to create test server");

        Self { server, sdk, state }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/merchant", get(merchant))
        .route("/card-flag/:number", get(card_flag))
        .with_state(state)
}

async fn merchant(gateway: PagSeguroService) -> String {
    gateway.credentials().email().to_string()
}

async fn card_flag(
    PagSeguroService(gateway): PagSeguroService,
    Path(number): Path<String>,
) -> Result<Json<Value>, (StatusCode, String)> {
    gateway
        .get_card_flag(&number, true)
        .await
        .map(|flag| Json(json!({ "flag": flag })))
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))
}
