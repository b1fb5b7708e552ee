//! Session caching across callers.

mod common;

use std::time::Duration;

use futures::future::join_all;

use common::{credentials, TestHarness};
use pagseguro_client::testing::{RecordingSdk, SdkCall};
use pagseguro_client::SessionHandle;

#[tokio::test]
async fn session_fetch_uses_configured_credentials() {
    let harness = TestHarness::new();

    harness.gateway.get_session(false).await.unwrap();

    assert_eq!(
        harness.sdk.calls(),
        vec![SdkCall::GetSession {
            credentials: credentials(),
        }]
    );
}

#[tokio::test]
async fn cached_session_is_reused_until_reset() {
    let harness = TestHarness::new();

    let first = harness.gateway.get_session(false).await.unwrap();
    let cached = harness.gateway.get_session(false).await.unwrap();
    let refreshed = harness.gateway.get_session(true).await.unwrap();
    let after = harness.gateway.get_session(false).await.unwrap();

    assert_eq!(first, cached);
    assert_eq!(refreshed, SessionHandle::new("session-2"));
    assert_eq!(after, refreshed);
    assert_eq!(harness.sdk.session_fetches(), 2);
}

#[tokio::test]
async fn concurrent_callers_share_one_fetch() {
    let harness =
        TestHarness::with_sdk(RecordingSdk::new().with_session_delay(Duration::from_millis(20)));

    let lookups = (0..8).map(|_| {
        let gateway = harness.gateway.clone();
        tokio::spawn(async move { gateway.get_session(false).await })
    });
    let sessions: Vec<SessionHandle> = join_all(lookups)
        .await
        .into_iter()
        .map(|joined| joined.unwrap().unwrap())
        .collect();

    assert_eq!(harness.sdk.session_fetches(), 1);
    assert!(sessions
        .iter()
        .all(|session| session == &SessionHandle::new("session-1")));
}
