//! Axum extractor for the gateway.

use std::ops::Deref;
use std::sync::Arc;

use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use pagseguro_client::PagSeguro;

use crate::container::Container;
use crate::error::ContainerError;
use crate::provider::SERVICE_NAME;

/// The PagSeguro gateway, resolved from the application's container.
///
/// ```ignore
/// async fn card_flag(PagSeguroService(gateway): PagSeguroService) -> String {
///     gateway.credentials().email().to_string()
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PagSeguroService(pub Arc<PagSeguro>);

impl Deref for PagSeguroService {
    type Target = PagSeguro;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PagSeguroService
where
    Arc<Container>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ContainerError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let container = Arc::<Container>::from_ref(state);
        container.resolve::<PagSeguro>(SERVICE_NAME).map(Self)
    }
}
