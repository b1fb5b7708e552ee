//! Common test utilities for gateway wrapper tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use pagseguro_client::testing::RecordingSdk;
use pagseguro_client::{Credentials, PagSeguro};

/// Merchant email used by every harness.
pub const EMAIL: &str = "m@x.com";

/// Merchant token used by every harness.
pub const TOKEN: &str = "tok123";

/// A gateway wired to a recording SDK.
pub struct TestHarness {
    /// The SDK double, for scripting answers and inspecting calls.
    pub sdk: Arc<RecordingSdk>,
    /// The wrapper under test.
    pub gateway: Arc<PagSeguro>,
}

impl TestHarness {
    /// Create a harness with an unscripted SDK.
    pub fn new() -> Self {
        Self::with_sdk(RecordingSdk::new())
    }

    /// Create a harness around a preconfigured SDK.
    pub fn with_sdk(sdk: RecordingSdk) -> Self {
        let sdk = Arc::new(sdk);
        let gateway = Arc::new(PagSeguro::new(credentials(), sdk.clone()));
        Self { sdk, gateway }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// The credentials every harness is built with.
pub fn credentials() -> Credentials {
    Credentials::new(EMAIL, TOKEN)
}
