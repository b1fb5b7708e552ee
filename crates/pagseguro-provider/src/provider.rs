//! PagSeguro service registration.

use std::sync::Arc;

use pagseguro_client::{Credentials, PagSeguro, PagSeguroSdk};

use crate::config::ConfigSource;
use crate::container::{Container, ServiceProvider};
use crate::error::ConfigError;

/// Name the gateway wrapper is registered under.
pub const SERVICE_NAME: &str = "PagSeguro";

/// Configuration key holding the merchant email.
pub const EMAIL_KEY: &str = "pagseguro.email";

/// Configuration key holding the merchant token.
pub const TOKEN_KEY: &str = "pagseguro.token";

/// Registers the PagSeguro gateway as a singleton.
///
/// The SDK handle is shared by the provider with the wrapper it builds; the
/// merchant credentials are read from configuration when the service is first
/// resolved.
#[derive(Clone)]
pub struct PagSeguroProvider {
    sdk: Arc<dyn PagSeguroSdk>,
}

impl PagSeguroProvider {
    /// Create a provider for the given SDK.
    #[must_use]
    pub fn new(sdk: Arc<dyn PagSeguroSdk>) -> Self {
        Self { sdk }
    }
}

impl ServiceProvider for PagSeguroProvider {
    fn register(&self, container: &mut Container) {
        let sdk = Arc::clone(&self.sdk);
        container.singleton(SERVICE_NAME, move |app| {
            Ok(gateway_from_config(app.config(), Arc::clone(&sdk))?)
        });
        tracing::info!(service = SERVICE_NAME, "Registered PagSeguro provider");
    }
}

/// Build a gateway wrapper from configured merchant credentials.
///
/// # Errors
///
/// Returns the configuration error for a missing or malformed
/// [`EMAIL_KEY`] or [`TOKEN_KEY`].
pub fn gateway_from_config(
    config: &dyn ConfigSource,
    sdk: Arc<dyn PagSeguroSdk>,
) -> Result<PagSeguro, ConfigError> {
    let email = config.get(EMAIL_KEY)?;
    let token = config.get(TOKEN_KEY)?;

    tracing::debug!(email = %email, "Creating PagSeguro gateway");

    Ok(PagSeguro::new(Credentials::new(email, token), sdk))
}
