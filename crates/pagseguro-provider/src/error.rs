//! Configuration and container errors.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The key is not present.
    #[error("missing configuration key: {0}")]
    MissingKey(String),

    /// The key is present but does not hold a string.
    #[error("configuration key {key} is not a string")]
    InvalidType {
        /// The offending key.
        key: String,
    },

    /// A configuration file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file is not a JSON object.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// Path of the file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while resolving a service from the container.
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    /// Nothing is registered under the name.
    #[error("service not registered: {0}")]
    NotRegistered(String),

    /// The registered service is not of the requested type.
    #[error("service {name} is not a {expected}")]
    TypeMismatch {
        /// Name the service was resolved by.
        name: String,
        /// Type the caller asked for.
        expected: &'static str,
    },

    /// The service factory could not read its configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: &'static str,
}

impl IntoResponse for ContainerError {
    fn into_response(self) -> Response {
        let code = match &self {
            Self::NotRegistered(_) => "service_not_registered",
            Self::TypeMismatch { .. } => "service_type_mismatch",
            Self::Config(_) => "service_misconfigured",
        };

        tracing::error!(error = %self, "Service resolution failed");

        let body = ErrorResponse {
            error: ErrorBody {
                code,
                message: "An internal error occurred",
            },
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
