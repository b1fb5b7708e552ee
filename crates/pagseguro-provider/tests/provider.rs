//! Singleton registration of the PagSeguro gateway.

mod common;

use std::sync::Arc;

use common::{boot, merchant_config, EMAIL, TOKEN};
use pagseguro_client::testing::{RecordingSdk, SdkCall};
use pagseguro_client::{Credentials, PagSeguro};
use pagseguro_provider::{
    AppConfig, ConfigError, ContainerError, EMAIL_KEY, SERVICE_NAME, TOKEN_KEY,
};

#[test]
fn resolving_twice_yields_same_instance() {
    let sdk = Arc::new(RecordingSdk::new());
    let state = boot(merchant_config(), &sdk);

    let first = state.container.resolve::<PagSeguro>(SERVICE_NAME).unwrap();
    let second = state.gateway().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn instance_carries_configured_credentials() {
    let sdk = Arc::new(RecordingSdk::new());
    let state = boot(merchant_config(), &sdk);

    let gateway = state.gateway().unwrap();

    assert_eq!(gateway.credentials(), &Credentials::new(EMAIL, TOKEN));
}

#[test]
fn provider_registers_under_service_name() {
    let sdk = Arc::new(RecordingSdk::new());
    let state = boot(AppConfig::new(), &sdk);

    assert!(state.container.has(SERVICE_NAME));
}

#[test]
fn missing_email_propagates() {
    let sdk = Arc::new(RecordingSdk::new());
    let state = boot(AppConfig::new().with(TOKEN_KEY, TOKEN), &sdk);

    let err = state.gateway().unwrap_err();

    assert!(matches!(
        err,
        ContainerError::Config(ConfigError::MissingKey(ref key)) if key == EMAIL_KEY
    ));
}

#[test]
fn missing_token_propagates() {
    let sdk = Arc::new(RecordingSdk::new());
    let state = boot(AppConfig::new().with(EMAIL_KEY, EMAIL), &sdk);

    assert!(matches!(
        state.gateway(),
        Err(ContainerError::Config(ConfigError::MissingKey(ref key))) if key == TOKEN_KEY
    ));
}

#[tokio::test]
async fn resolved_gateway_uses_shared_sdk() {
    let sdk = Arc::new(RecordingSdk::new());
    let state = boot(merchant_config(), &sdk);

    let gateway = state.gateway().unwrap();
    gateway.get_session(false).await.unwrap();
    gateway.cancel_subscription("PRE-1").await.unwrap();

    assert_eq!(
        sdk.calls(),
        vec![
            SdkCall::GetSession {
                credentials: Credentials::new(EMAIL, TOKEN),
            },
            SdkCall::CancelSubscription {
                pre_approval_reference: "PRE-1".into(),
                credentials: Credentials::new(EMAIL, TOKEN),
            },
        ]
    );
}

#[tokio::test]
async fn session_is_shared_between_resolutions() {
    let sdk = Arc::new(RecordingSdk::new());
    let state = boot(merchant_config(), &sdk);

    state.gateway().unwrap().get_session(false).await.unwrap();
    state.gateway().unwrap().get_session(false).await.unwrap();

    assert_eq!(sdk.session_fetches(), 1);
}
