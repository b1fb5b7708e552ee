//! Error types for gateway calls.

/// Message the gateway uses when a session is no longer known to it.
///
/// The gateway reports a stale session only through this human-readable text,
/// so matching on it is the one way to tell a stale session apart from other
/// rejections.
pub const STALE_SESSION_MESSAGE: &str = "Sessao nao encontrada no armazenamento";

/// Errors returned by a gateway SDK.
///
/// The adapter never translates these: whatever the SDK reports is what the
/// caller receives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SdkError {
    /// The gateway rejected the request.
    #[error("{message}")]
    Gateway {
        /// Message as reported by the gateway.
        message: String,
        /// Gateway error code, if any.
        code: Option<String>,
    },

    /// The request never reached the gateway or the connection failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// The gateway answered with something the SDK could not decode.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl SdkError {
    /// Create a gateway rejection with no error code.
    #[must_use]
    pub fn gateway(message: impl Into<String>) -> Self {
        Self::Gateway {
            message: message.into(),
            code: None,
        }
    }

    /// The rejection the gateway sends for an unknown session.
    #[must_use]
    pub fn stale_session() -> Self {
        Self::gateway(STALE_SESSION_MESSAGE)
    }

    /// Whether this error means the session used for the call is stale.
    #[must_use]
    pub fn is_stale_session(&self) -> bool {
        matches!(self, Self::Gateway { message, .. } if message == STALE_SESSION_MESSAGE)
    }
}
