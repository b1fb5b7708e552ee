//! The gateway SDK seam.

use async_trait::async_trait;

use pagseguro_core::{
    CardInformation, ChargeResult, Credentials, Discount, NotificationData, PaymentMethods,
    PlanDescriptor, PlanInformation, PlanPayment, PlanPriceUpdate, SdkError, SessionHandle,
    Subscriber, SubscriptionStatus,
};

/// Operations a PagSeguro SDK must provide.
///
/// Implementations own everything that talks to the gateway: request signing,
/// the wire format, response decoding. [`crate::PagSeguro`] only decides which
/// session and credentials go with each call.
///
/// Card and payment-method operations take a session handle; recurring-billing
/// and notification operations take the merchant credentials directly.
#[async_trait]
pub trait PagSeguroSdk: Send + Sync {
    /// Open a new session for the merchant.
    async fn get_session(&self, credentials: &Credentials) -> Result<SessionHandle, SdkError>;

    /// Tokenize a card.
    async fn get_card_token(
        &self,
        session: &SessionHandle,
        card: &CardInformation,
    ) -> Result<Option<String>, SdkError>;

    /// Look up the brand of a card number.
    ///
    /// Fails with [`SdkError::stale_session`] when the gateway no longer knows
    /// `session`.
    async fn get_card_flag(
        &self,
        session: &SessionHandle,
        card_number: &str,
    ) -> Result<Option<String>, SdkError>;

    /// List the payment methods available for `amount`.
    async fn get_payment_methods(
        &self,
        amount: f64,
        session: &SessionHandle,
    ) -> Result<PaymentMethods, SdkError>;

    /// Create a recurring plan.
    async fn create_plan(
        &self,
        plan: &PlanInformation,
        credentials: &Credentials,
    ) -> Result<Option<PlanDescriptor>, SdkError>;

    /// Change the price of a plan.
    async fn edit_plan_price(
        &self,
        plan_reference: &str,
        update: &PlanPriceUpdate,
        credentials: &Credentials,
    ) -> Result<bool, SdkError>;

    /// Subscribe a user to a plan, returning the pre-approval code.
    async fn join_plan(
        &self,
        subscriber: &Subscriber,
        credentials: &Credentials,
    ) -> Result<Option<String>, SdkError>;

    /// Charge a subscription.
    async fn charge_plan(
        &self,
        payment: &PlanPayment,
        credentials: &Credentials,
    ) -> Result<Option<ChargeResult>, SdkError>;

    /// Retry a failed subscription payment.
    async fn retry_plan_payment(
        &self,
        pre_approval_code: &str,
        plan_reference: &str,
        payment: &PlanPayment,
        credentials: &Credentials,
    ) -> Result<String, SdkError>;

    /// Move a subscription to another status.
    async fn edit_subscription_status(
        &self,
        pre_approval_reference: &str,
        status: SubscriptionStatus,
        credentials: &Credentials,
    ) -> Result<bool, SdkError>;

    /// Cancel a subscription.
    async fn cancel_subscription(
        &self,
        pre_approval_reference: &str,
        credentials: &Credentials,
    ) -> Result<bool, SdkError>;

    /// Apply a discount to the next payment of a subscription.
    async fn apply_discount(
        &self,
        pre_approval_reference: &str,
        discount: &Discount,
        credentials: &Credentials,
    ) -> Result<bool, SdkError>;

    /// Fetch the transaction behind a notification code.
    async fn get_notification(
        &self,
        notification_code: &str,
        credentials: &Credentials,
    ) -> Result<Option<NotificationData>, SdkError>;

    /// Fetch the pre-approval behind a notification code.
    async fn get_pre_approval_notification(
        &self,
        pre_approval_code: &str,
        credentials: &Credentials,
    ) -> Result<Option<NotificationData>, SdkError>;
}
