//! Core types for the PagSeguro gateway adapter.
//!
//! This crate provides the types shared between the SDK seam and the gateway wrapper:
//!
//! - **Credentials**: `Credentials` (merchant email and token)
//! - **Sessions**: `SessionHandle`, `SessionState`, `SessionStep`
//! - **Cards**: `CardInformation`
//! - **Recurring billing**: `PlanDescriptor`, `PlanPriceUpdate`, `ChargeResult`,
//!   `SubscriptionStatus`, `Discount`
//! - **Opaque payloads**: `PlanInformation`, `Subscriber`, `PlanPayment`,
//!   `PaymentMethods`, `NotificationData`
//! - **Errors**: `SdkError`
//!
//! None of these types validate their contents. The gateway is the only authority
//! on what a well-formed card, plan or payment looks like.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod card;
pub mod credentials;
pub mod error;
pub mod payload;
pub mod recurring;
pub mod session;

pub use card::CardInformation;
pub use credentials::Credentials;
pub use error::{SdkError, STALE_SESSION_MESSAGE};
pub use payload::{NotificationData, PaymentMethods, PlanInformation, PlanPayment, Subscriber};
pub use recurring::{
    ChargeResult, Discount, DiscountType, PlanDescriptor, PlanPriceUpdate, SubscriptionStatus,
};
pub use session::{SessionHandle, SessionState, SessionStep};
