//! Session-caching gateway wrapper.

use std::fmt;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use pagseguro_core::{
    CardInformation, ChargeResult, Credentials, Discount, DiscountType, NotificationData,
    PaymentMethods, PlanDescriptor, PlanInformation, PlanPayment, PlanPriceUpdate, SdkError,
    SessionHandle, SessionState, SessionStep, Subscriber, SubscriptionStatus,
};

use crate::sdk::PagSeguroSdk;

/// Number of times `get_card_flag` refreshes a stale session before giving up.
pub const MAX_SESSION_RETRIES: u8 = 1;

/// PagSeguro gateway wrapper.
///
/// Holds the merchant credentials and at most one cached session, and forwards
/// every operation to the SDK. Results and errors are returned exactly as the
/// SDK produced them.
///
/// Session transitions run under a lock that is held while a new session is
/// fetched, so concurrent callers that find no session share a single fetch.
pub struct PagSeguro {
    credentials: Credentials,
    session: Mutex<SessionState>,
    sdk: Arc<dyn PagSeguroSdk>,
}

impl PagSeguro {
    /// Create a wrapper with no session.
    #[must_use]
    pub fn new(credentials: Credentials, sdk: Arc<dyn PagSeguroSdk>) -> Self {
        Self {
            credentials,
            session: Mutex::new(SessionState::NoSession),
            sdk,
        }
    }

    /// The merchant credentials sent with every credential-bearing call.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Whether a session is currently cached.
    pub async fn has_session(&self) -> bool {
        self.session.lock().await.handle().is_some()
    }

    /// Drop the cached session; the next session-bound call fetches a new one.
    pub async fn invalidate_session(&self) {
        self.session.lock().await.invalidate();
    }

    /// Return the cached session, fetching one if none is cached or `reset` is set.
    ///
    /// A failed fetch leaves the previous state untouched.
    ///
    /// # Errors
    ///
    /// Returns the SDK error if a session has to be fetched and the fetch fails.
    pub async fn get_session(&self, reset: bool) -> Result<SessionHandle, SdkError> {
        let mut state = self.session.lock().await;

        match state.step(reset) {
            SessionStep::Reuse(handle) => Ok(handle),
            SessionStep::Fetch => {
                debug!(reset, email = %self.credentials.email(), "Fetching gateway session");
                let handle = self.sdk.get_session(&self.credentials).await?;
                state.install(handle.clone());
                Ok(handle)
            }
        }
    }

    /// Tokenize a card.
    ///
    /// # Errors
    ///
    /// Returns the SDK error unchanged.
    pub async fn get_card_token(
        &self,
        card: &CardInformation,
    ) -> Result<Option<String>, SdkError> {
        let session = self.get_session(false).await?;
        self.sdk.get_card_token(&session, card).await
    }

    /// Look up the brand of a card number.
    ///
    /// When `retry_on_invalid_session` is set and the gateway reports a stale
    /// session, the session is refreshed and the lookup retried, at most
    /// [`MAX_SESSION_RETRIES`] times. Any other failure, and a failure of the
    /// retry itself, is returned as is.
    ///
    /// # Errors
    ///
    /// Returns the SDK error of the last attempt.
    #[instrument(skip(self, card_number))]
    pub async fn get_card_flag(
        &self,
        card_number: &str,
        retry_on_invalid_session: bool,
    ) -> Result<Option<String>, SdkError> {
        let mut retries_left = if retry_on_invalid_session {
            MAX_SESSION_RETRIES
        } else {
            0
        };
        let mut session = self.get_session(false).await?;

        loop {
            match self.sdk.get_card_flag(&session, card_number).await {
                Err(err) if err.is_stale_session() && retries_left > 0 => {
                    retries_left -= 1;
                    warn!("Gateway session is stale, refreshing");
                    session = self.get_session(true).await?;
                }
                result => return result,
            }
        }
    }

    /// List the payment methods available for `amount`.
    ///
    /// # Errors
    ///
    /// Returns the SDK error unchanged.
    pub async fn get_payment_methods(&self, amount: f64) -> Result<PaymentMethods, SdkError> {
        let session = self.get_session(false).await?;
        self.sdk.get_payment_methods(amount, &session).await
    }

    /// Create a recurring plan.
    ///
    /// # Errors
    ///
    /// Returns the SDK error unchanged.
    pub async fn create_plan(
        &self,
        plan: &PlanInformation,
    ) -> Result<Option<PlanDescriptor>, SdkError> {
        self.sdk.create_plan(plan, &self.credentials).await
    }

    /// Change the price of a plan, optionally moving active subscriptions to it.
    ///
    /// # Errors
    ///
    /// Returns the SDK error unchanged.
    pub async fn edit_plan_price(
        &self,
        plan_reference: &str,
        amount_per_payment: f64,
        update_subscriptions: bool,
    ) -> Result<bool, SdkError> {
        let update = PlanPriceUpdate {
            amount_per_payment,
            update_subscriptions,
        };
        self.sdk
            .edit_plan_price(plan_reference, &update, &self.credentials)
            .await
    }

    /// Subscribe a user to a plan.
    ///
    /// # Errors
    ///
    /// Returns the SDK error unchanged.
    pub async fn join_plan(&self, subscriber: &Subscriber) -> Result<Option<String>, SdkError> {
        self.sdk.join_plan(subscriber, &self.credentials).await
    }

    /// Charge a subscription.
    ///
    /// # Errors
    ///
    /// Returns the SDK error unchanged.
    pub async fn charge_plan(
        &self,
        payment: &PlanPayment,
    ) -> Result<Option<ChargeResult>, SdkError> {
        self.sdk.charge_plan(payment, &self.credentials).await
    }

    /// Retry a failed subscription payment.
    ///
    /// # Errors
    ///
    /// Returns the SDK error unchanged.
    pub async fn retry_plan_payment(
        &self,
        pre_approval_code: &str,
        plan_reference: &str,
        payment: &PlanPayment,
    ) -> Result<String, SdkError> {
        self.sdk
            .retry_plan_payment(pre_approval_code, plan_reference, payment, &self.credentials)
            .await
    }

    /// Move a subscription to another status.
    ///
    /// # Errors
    ///
    /// Returns the SDK error unchanged.
    pub async fn edit_subscription_status(
        &self,
        pre_approval_reference: &str,
        status: SubscriptionStatus,
    ) -> Result<bool, SdkError> {
        self.sdk
            .edit_subscription_status(pre_approval_reference, status, &self.credentials)
            .await
    }

    /// Cancel a subscription.
    ///
    /// # Errors
    ///
    /// Returns the SDK error unchanged.
    pub async fn cancel_subscription(&self, pre_approval_reference: &str) -> Result<bool, SdkError> {
        self.sdk
            .cancel_subscription(pre_approval_reference, &self.credentials)
            .await
    }

    /// Fetch the transaction behind a notification code.
    ///
    /// # Errors
    ///
    /// Returns the SDK error unchanged.
    pub async fn get_notification_data(
        &self,
        notification_code: &str,
    ) -> Result<Option<NotificationData>, SdkError> {
        self.sdk
            .get_notification(notification_code, &self.credentials)
            .await
    }

    /// Apply a discount to the next payment of a subscription.
    ///
    /// # Errors
    ///
    /// Returns the SDK error unchanged.
    pub async fn apply_discount(
        &self,
        pre_approval_reference: &str,
        kind: DiscountType,
        value: f64,
    ) -> Result<bool, SdkError> {
        let discount = Discount { kind, value };
        self.sdk
            .apply_discount(pre_approval_reference, &discount, &self.credentials)
            .await
    }

    /// Fetch the pre-approval behind a notification code.
    ///
    /// # Errors
    ///
    /// Returns the SDK error unchanged.
    pub async fn get_pre_approval_notification_data(
        &self,
        pre_approval_code: &str,
    ) -> Result<Option<NotificationData>, SdkError> {
        self.sdk
            .get_pre_approval_notification(pre_approval_code, &self.credentials)
            .await
    }
}

impl fmt::Debug for PagSeguro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagSeguro")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
