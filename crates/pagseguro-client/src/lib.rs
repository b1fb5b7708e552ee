//! PagSeguro gateway wrapper.
//!
//! This crate wraps a PagSeguro SDK (anything implementing [`PagSeguroSdk`])
//! with merchant credentials and a cached gateway session.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use pagseguro_client::{Credentials, PagSeguro, PagSeguroSdk, SdkError};
//!
//! # async fn example(sdk: Arc<dyn PagSeguroSdk>) -> Result<(), SdkError> {
//! let gateway = PagSeguro::new(Credentials::new("merchant@example.com", "token"), sdk);
//!
//! // Opens a session on first use and retries once if the gateway forgot it
//! let brand = gateway.get_card_flag("4111111111111111", true).await?;
//! println!("Card brand: {brand:?}");
//!
//! // Recurring billing only needs the merchant credentials
//! let cancelled = gateway.cancel_subscription("PRE-APPROVAL-REF").await?;
//! println!("Cancelled: {cancelled}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod gateway;
mod sdk;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use gateway::{PagSeguro, MAX_SESSION_RETRIES};
pub use sdk::PagSeguroSdk;

pub use pagseguro_core::{
    CardInformation, ChargeResult, Credentials, Discount, DiscountType, NotificationData,
    PaymentMethods, PlanDescriptor, PlanInformation, PlanPayment, PlanPriceUpdate, SdkError,
    SessionHandle, Subscriber, SubscriptionStatus, STALE_SESSION_MESSAGE,
};
