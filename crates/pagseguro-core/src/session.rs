//! Gateway sessions.
//!
//! A session is an opaque token the gateway issues for a merchant. Card and
//! payment-method operations need one; recurring-billing operations do not.
//!
//! The cache of the current session is modelled as a two-state machine:
//!
//! ```text
//!            step(_) = Fetch            install(h)
//! NoSession ─────────────────▶ (fetch) ───────────▶ Active(h)
//! Active(h) ── step(false) = Reuse(h)
//! Active(h) ── step(true)  = Fetch ──▶ install(h') ──▶ Active(h')
//! ```
//!
//! `step` is pure: it only says what the caller must do. Fetching is left to
//! whoever owns the state, so the state itself never performs I/O.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque session token issued by the gateway.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionHandle(String);

impl SessionHandle {
    /// Wrap a session token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionHandle({})", self.0)
    }
}

impl fmt::Display for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionHandle {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for SessionHandle {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

/// The cached session of a single wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No session has been fetched yet, or it was invalidated.
    #[default]
    NoSession,
    /// A session is cached.
    Active(SessionHandle),
}

/// What the owner of a [`SessionState`] must do to obtain a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStep {
    /// The cached handle can be used as is.
    Reuse(SessionHandle),
    /// A new session must be fetched and then installed.
    Fetch,
}

impl SessionState {
    /// Decide whether the cached session can be reused.
    ///
    /// `force_refresh` always yields [`SessionStep::Fetch`], regardless of the
    /// cached value.
    #[must_use]
    pub fn step(&self, force_refresh: bool) -> SessionStep {
        match self {
            Self::Active(handle) if !force_refresh => SessionStep::Reuse(handle.clone()),
            _ => SessionStep::Fetch,
        }
    }

    /// Replace whatever is cached with `handle`.
    pub fn install(&mut self, handle: SessionHandle) {
        *self = Self::Active(handle);
    }

    /// Drop the cached handle.
    pub fn invalidate(&mut self) {
        *self = Self::NoSession;
    }

    /// The cached handle, if any.
    #[must_use]
    pub fn handle(&self) -> Option<&SessionHandle> {
        match self {
            Self::Active(handle) => Some(handle),
            Self::NoSession => None,
        }
    }
}
