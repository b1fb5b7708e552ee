//! Merchant credentials.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The `(email, token)` pair identifying a merchant account to the gateway.
///
/// Credentials are read once from configuration and never change for the
/// lifetime of the wrapper that holds them. The `Debug` representation
/// redacts the token so the pair can be traced safely.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    email: String,
    token: String,
}

impl Credentials {
    /// Create a new credential pair.
    #[must_use]
    pub fn new(email: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            token: token.into(),
        }
    }

    /// The merchant email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The merchant token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("token", &"<redacted>")
            .finish()
    }
}
