//! Recurring-billing types.
//!
//! Results the gateway returns for plan and subscription operations, and the
//! small request bodies the adapter assembles itself.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A plan created by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDescriptor {
    /// Plan code assigned by the gateway.
    pub code: String,
    /// Creation date as returned by the gateway.
    pub date: String,
}

/// New price for an existing plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPriceUpdate {
    /// Amount charged per payment.
    pub amount_per_payment: f64,
    /// Whether active subscriptions move to the new price.
    pub update_subscriptions: bool,
}

/// Outcome of charging a recurring plan.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeResult {
    /// Charge date, when the gateway reports one.
    pub date: Option<String>,
    /// Transaction code, when the gateway reports one.
    pub transaction_code: Option<String>,
}

/// Target status of a subscription (pre-approval).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    /// Subscription is charged normally.
    Active,
    /// Subscription is paused.
    Suspended,
    /// Subscription is cancelled.
    Cancelled,
}

impl SubscriptionStatus {
    /// The gateway's name for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Suspended => "SUSPENDED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a discount value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscountType {
    /// `value` is a percentage of the payment.
    #[serde(rename = "DISCOUNT_PERCENT")]
    Percent,
    /// `value` is a fixed amount.
    #[serde(rename = "DISCOUNT_AMOUNT")]
    Amount,
}

impl DiscountType {
    /// The gateway's name for this discount type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Percent => "DISCOUNT_PERCENT",
            Self::Amount => "DISCOUNT_AMOUNT",
        }
    }
}

/// Discount applied to the next payment of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    /// Discount type.
    #[serde(rename = "type")]
    pub kind: DiscountType,
    /// Discount value.
    pub value: f64,
}
