//! Opaque gateway payloads.
//!
//! Plans, subscribers, payments, payment-method listings and notifications are
//! structures owned by the gateway. The adapter only routes them, so each one is
//! a JSON newtype: distinct at the type level, untouched on the wire.
//!
//! # Macro-based payload types
//!
//! The `opaque_payload!` macro generates the newtype and its conversions so
//! every payload behaves the same way.

use serde::{Deserialize, Serialize};

/// Macro to define a JSON-backed payload type with standard trait implementations.
///
/// This macro generates a transparent newtype around `serde_json::Value` with:
/// - `Clone`, `Debug`, `PartialEq`, `Default`
/// - `Serialize`, `Deserialize` (as the inner JSON)
/// - `From<serde_json::Value>`, `From<$name> for serde_json::Value`
/// - `as_json`, `into_json`, `get`
macro_rules! opaque_payload {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(serde_json::Value);

        impl $name {
            /// Wrap a JSON value.
            #[must_use]
            pub const fn new(value: serde_json::Value) -> Self {
                Self(value)
            }

            /// Borrow the underlying JSON.
            #[must_use]
            pub const fn as_json(&self) -> &serde_json::Value {
                &self.0
            }

            /// Return the underlying JSON.
            #[must_use]
            pub fn into_json(self) -> serde_json::Value {
                self.0
            }

            /// Look up a top-level field.
            #[must_use]
            pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
                self.0.get(key)
            }
        }

        impl From<serde_json::Value> for $name {
            fn from(value: serde_json::Value) -> Self {
                Self(value)
            }
        }

        impl From<$name> for serde_json::Value {
            fn from(payload: $name) -> Self {
                payload.0
            }
        }
    };
}

opaque_payload!(
    PlanInformation,
    "Plan definition submitted when creating a recurring plan."
);
opaque_payload!(
    Subscriber,
    "Sender, payment method and plan reference used to join a plan."
);
opaque_payload!(
    PlanPayment,
    "Charge details for a recurring plan (pre-approval code, items, reference)."
);
opaque_payload!(
    PaymentMethods,
    "Payment methods the gateway offers for a given amount."
);
opaque_payload!(
    NotificationData,
    "Transaction or pre-approval data the gateway returns for a notification code."
);
