//! PagSeguro service provider.
//!
//! This crate makes the PagSeguro gateway wrapper available to an axum
//! application as a singleton service:
//!
//! - **Configuration** - `AppConfig`, read from a secrets file and the environment
//! - **Container** - named singletons built on first resolution
//! - **Provider** - `PagSeguroProvider`, which registers the gateway under `"PagSeguro"`
//! - **Web integration** - `AppState` and the `PagSeguroService` extractor
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use axum::routing::get;
//! use axum::Router;
//! use pagseguro_client::PagSeguroSdk;
//! use pagseguro_provider::{AppConfig, AppState, PagSeguroProvider, PagSeguroService};
//!
//! async fn merchant(gateway: PagSeguroService) -> String {
//!     gateway.credentials().email().to_string()
//! }
//!
//! # fn example(sdk: Arc<dyn PagSeguroSdk>) {
//! let state = AppState::boot(
//!     Arc::new(AppConfig::from_env()),
//!     &[&PagSeguroProvider::new(sdk)],
//! );
//! let app: Router = Router::new()
//!     .route("/merchant", get(merchant))
//!     .with_state(state);
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod container;
pub mod error;
pub mod extract;
pub mod provider;
pub mod state;

pub use config::{AppConfig, ConfigSource};
pub use container::{Container, ServiceProvider};
pub use error::{ConfigError, ContainerError};
pub use extract::PagSeguroService;
pub use provider::{gateway_from_config, PagSeguroProvider, EMAIL_KEY, SERVICE_NAME, TOKEN_KEY};
pub use state::AppState;
