//! Application state.

use std::sync::Arc;

use axum::extract::FromRef;
use pagseguro_client::PagSeguro;

use crate::config::ConfigSource;
use crate::container::{Container, ServiceProvider};
use crate::error::ContainerError;
use crate::provider::SERVICE_NAME;

/// Application state shared across handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The service container.
    pub container: Arc<Container>,
}

impl AppState {
    /// Wrap an already populated container.
    #[must_use]
    pub fn new(container: Container) -> Self {
        Self {
            container: Arc::new(container),
        }
    }

    /// Build a container over `config` and run every provider's registration.
    #[must_use]
    pub fn boot(config: Arc<dyn ConfigSource>, providers: &[&dyn ServiceProvider]) -> Self {
        let mut container = Container::new(config);
        container.register_all(providers);
        Self::new(container)
    }

    /// Resolve the PagSeguro gateway.
    ///
    /// # Errors
    ///
    /// Returns an error if no provider registered the gateway or its
    /// configuration is incomplete.
    pub fn gateway(&self) -> Result<Arc<PagSeguro>, ContainerError> {
        self.container.resolve(SERVICE_NAME)
    }
}

impl FromRef<AppState> for Arc<Container> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.container)
    }
}
