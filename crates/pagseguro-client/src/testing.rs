//! In-memory SDK double.
//!
//! [`RecordingSdk`] records every call it receives, with its arguments, and
//! answers from per-operation scripts. Unscripted calls get a neutral default
//! (`Ok(None)`, `Ok(true)`, an empty payload, or a fresh `session-N` handle).

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use pagseguro_core::{
    CardInformation, ChargeResult, Credentials, Discount, NotificationData, PaymentMethods,
    PlanDescriptor, PlanInformation, PlanPayment, PlanPriceUpdate, SdkError, SessionHandle,
    Subscriber, SubscriptionStatus,
};

use crate::sdk::PagSeguroSdk;

/// A call received by [`RecordingSdk`].
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum SdkCall {
    GetSession {
        credentials: Credentials,
    },
    GetCardToken {
        session: SessionHandle,
        card: CardInformation,
    },
    GetCardFlag {
        session: SessionHandle,
        card_number: String,
    },
    GetPaymentMethods {
        amount: f64,
        session: SessionHandle,
    },
    CreatePlan {
        plan: PlanInformation,
        credentials: Credentials,
    },
    EditPlanPrice {
        plan_reference: String,
        update: PlanPriceUpdate,
        credentials: Credentials,
    },
    JoinPlan {
        subscriber: Subscriber,
        credentials: Credentials,
    },
    ChargePlan {
        payment: PlanPayment,
        credentials: Credentials,
    },
    RetryPlanPayment {
        pre_approval_code: String,
        plan_reference: String,
        payment: PlanPayment,
        credentials: Credentials,
    },
    EditSubscriptionStatus {
        pre_approval_reference: String,
        status: SubscriptionStatus,
        credentials: Credentials,
    },
    CancelSubscription {
        pre_approval_reference: String,
        credentials: Credentials,
    },
    ApplyDiscount {
        pre_approval_reference: String,
        discount: Discount,
        credentials: Credentials,
    },
    GetNotification {
        notification_code: String,
        credentials: Credentials,
    },
    GetPreApprovalNotification {
        pre_approval_code: String,
        credentials: Credentials,
    },
}

impl SdkCall {
    /// The credentials carried by the call, if the operation takes any.
    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        match self {
            Self::GetCardToken { .. } | Self::GetCardFlag { .. } | Self::GetPaymentMethods { .. } => {
                None
            }
            Self::GetSession { credentials }
            | Self::CreatePlan { credentials, .. }
            | Self::EditPlanPrice { credentials, .. }
            | Self::JoinPlan { credentials, .. }
            | Self::ChargePlan { credentials, .. }
            | Self::RetryPlanPayment { credentials, .. }
            | Self::EditSubscriptionStatus { credentials, .. }
            | Self::CancelSubscription { credentials, .. }
            | Self::ApplyDiscount { credentials, .. }
            | Self::GetNotification { credentials, .. }
            | Self::GetPreApprovalNotification { credentials, .. } => Some(credentials),
        }
    }
}

type Script<T> = VecDeque<Result<T, SdkError>>;

#[derive(Default)]
struct State {
    calls: Vec<SdkCall>,
    sessions_issued: usize,
    sessions: Script<SessionHandle>,
    card_tokens: Script<Option<String>>,
    card_flags: Script<Option<String>>,
    payment_methods: Script<PaymentMethods>,
    plans: Script<Option<PlanDescriptor>>,
    plan_prices: Script<bool>,
    joins: Script<Option<String>>,
    charges: Script<Option<ChargeResult>>,
    retries: Script<String>,
    status_edits: Script<bool>,
    cancellations: Script<bool>,
    discounts: Script<bool>,
    notifications: Script<Option<NotificationData>>,
    pre_approval_notifications: Script<Option<NotificationData>>,
}

/// Recording, scriptable [`PagSeguroSdk`].
#[derive(Default)]
pub struct RecordingSdk {
    state: Mutex<State>,
    session_delay: Option<Duration>,
}

impl RecordingSdk {
    /// Create an SDK double with empty scripts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every session fetch take `delay` before answering.
    #[must_use]
    pub fn with_session_delay(mut self, delay: Duration) -> Self {
        self.session_delay = Some(delay);
        self
    }

    /// Every call received so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<SdkCall> {
        self.state.lock().calls.clone()
    }

    /// Number of session fetches received.
    #[must_use]
    pub fn session_fetches(&self) -> usize {
        self.count(|call| matches!(call, SdkCall::GetSession { .. }))
    }

    /// Number of card-flag lookups received.
    #[must_use]
    pub fn card_flag_lookups(&self) -> usize {
        self.count(|call| matches!(call, SdkCall::GetCardFlag { .. }))
    }

    fn count(&self, predicate: impl Fn(&SdkCall) -> bool) -> usize {
        self.state.lock().calls.iter().filter(|call| predicate(*call)).count()
    }

    /// Queue the answer of the next session fetch.
    pub fn push_session(&self, result: Result<SessionHandle, SdkError>) {
        self.state.lock().sessions.push_back(result);
    }

    /// Queue the answer of the next card tokenization.
    pub fn push_card_token(&self, result: Result<Option<String>, SdkError>) {
        self.state.lock().card_tokens.push_back(result);
    }

    /// Queue the answer of the next card-flag lookup.
    pub fn push_card_flag(&self, result: Result<Option<String>, SdkError>) {
        self.state.lock().card_flags.push_back(result);
    }

    /// Queue the answer of the next payment-method listing.
    pub fn push_payment_methods(&self, result: Result<PaymentMethods, SdkError>) {
        self.state.lock().payment_methods.push_back(result);
    }

    /// Queue the answer of the next plan creation.
    pub fn push_plan(&self, result: Result<Option<PlanDescriptor>, SdkError>) {
        self.state.lock().plans.push_back(result);
    }

    /// Queue the answer of the next plan price change.
    pub fn push_plan_price(&self, result: Result<bool, SdkError>) {
        self.state.lock().plan_prices.push_back(result);
    }

    /// Queue the answer of the next plan subscription.
    pub fn push_join(&self, result: Result<Option<String>, SdkError>) {
        self.state.lock().joins.push_back(result);
    }

    /// Queue the answer of the next plan charge.
    pub fn push_charge(&self, result: Result<Option<ChargeResult>, SdkError>) {
        self.state.lock().charges.push_back(result);
    }

    /// Queue the answer of the next payment retry.
    pub fn push_retry(&self, result: Result<String, SdkError>) {
        self.state.lock().retries.push_back(result);
    }

    /// Queue the answer of the next subscription status change.
    pub fn push_status_edit(&self, result: Result<bool, SdkError>) {
        self.state.lock().status_edits.push_back(result);
    }

    /// Queue the answer of the next cancellation.
    pub fn push_cancellation(&self, result: Result<bool, SdkError>) {
        self.state.lock().cancellations.push_back(result);
    }

    /// Queue the answer of the next discount.
    pub fn push_discount(&self, result: Result<bool, SdkError>) {
        self.state.lock().discounts.push_back(result);
    }

    /// Queue the answer of the next notification lookup.
    pub fn push_notification(&self, result: Result<Option<NotificationData>, SdkError>) {
        self.state.lock().notifications.push_back(result);
    }

    /// Queue the answer of the next pre-approval notification lookup.
    pub fn push_pre_approval_notification(
        &self,
        result: Result<Option<NotificationData>, SdkError>,
    ) {
        self.state.lock().pre_approval_notifications.push_back(result);
    }

    fn record<T>(
        &self,
        call: SdkCall,
        script: impl FnOnce(&mut State) -> &mut Script<T>,
        default: impl FnOnce() -> T,
    ) -> Result<T, SdkError> {
        let mut state = self.state.lock();
        state.calls.push(call);
        script(&mut *state).pop_front().unwrap_or_else(|| Ok(default()))
    }
}

#[async_trait]
impl PagSeguroSdk for RecordingSdk {
    async fn get_session(&self, credentials: &Credentials) -> Result<SessionHandle, SdkError> {
        let result = {
            let mut state = self.state.lock();
            state.calls.push(SdkCall::GetSession {
                credentials: credentials.clone(),
            });
            state.sessions_issued += 1;
            let issued = state.sessions_issued;
            state
                .sessions
                .pop_front()
                .unwrap_or_else(|| Ok(SessionHandle::new(format!("session-{issued}"))))
        };

        if let Some(delay) = self.session_delay {
            tokio::time::sleep(delay).await;
        }

        result
    }

    async fn get_card_token(
        &self,
        session: &SessionHandle,
        card: &CardInformation,
    ) -> Result<Option<String>, SdkError> {
        let call = SdkCall::GetCardToken {
            session: session.clone(),
            card: card.clone(),
        };
        self.record(call, |s| &mut s.card_tokens, || None)
    }

    async fn get_card_flag(
        &self,
        session: &SessionHandle,
        card_number: &str,
    ) -> Result<Option<String>, SdkError> {
        let call = SdkCall::GetCardFlag {
            session: session.clone(),
            card_number: card_number.to_string(),
        };
        self.record(call, |s| &mut s.card_flags, || None)
    }

    async fn get_payment_methods(
        &self,
        amount: f64,
        session: &SessionHandle,
    ) -> Result<PaymentMethods, SdkError> {
        let call = SdkCall::GetPaymentMethods {
            amount,
            session: session.clone(),
        };
        self.record(call, |s| &mut s.payment_methods, PaymentMethods::default)
    }

    async fn create_plan(
        &self,
        plan: &PlanInformation,
        credentials: &Credentials,
    ) -> Result<Option<PlanDescriptor>, SdkError> {
        let call = SdkCall::CreatePlan {
            plan: plan.clone(),
            credentials: credentials.clone(),
        };
        self.record(call, |s| &mut s.plans, || None)
    }

    async fn edit_plan_price(
        &self,
        plan_reference: &str,
        update: &PlanPriceUpdate,
        credentials: &Credentials,
    ) -> Result<bool, SdkError> {
        let call = SdkCall::EditPlanPrice {
            plan_reference: plan_reference.to_string(),
            update: *update,
            credentials: credentials.clone(),
        };
        self.record(call, |s| &mut s.plan_prices, || true)
    }

    async fn join_plan(
        &self,
        subscriber: &Subscriber,
        credentials: &Credentials,
    ) -> Result<Option<String>, SdkError> {
        let call = SdkCall::JoinPlan {
            subscriber: subscriber.clone(),
            credentials: credentials.clone(),
        };
        self.record(call, |s| &mut s.joins, || None)
    }

    async fn charge_plan(
        &self,
        payment: &PlanPayment,
        credentials: &Credentials,
    ) -> Result<Option<ChargeResult>, SdkError> {
        let call = SdkCall::ChargePlan {
            payment: payment.clone(),
            credentials: credentials.clone(),
        };
        self.record(call, |s| &mut s.charges, || None)
    }

    async fn retry_plan_payment(
        &self,
        pre_approval_code: &str,
        plan_reference: &str,
        payment: &PlanPayment,
        credentials: &Credentials,
    ) -> Result<String, SdkError> {
        let call = SdkCall::RetryPlanPayment {
            pre_approval_code: pre_approval_code.to_string(),
            plan_reference: plan_reference.to_string(),
            payment: payment.clone(),
            credentials: credentials.clone(),
        };
        self.record(call, |s| &mut s.retries, String::new)
    }

    async fn edit_subscription_status(
        &self,
        pre_approval_reference: &str,
        status: SubscriptionStatus,
        credentials: &Credentials,
    ) -> Result<bool, SdkError> {
        let call = SdkCall::EditSubscriptionStatus {
            pre_approval_reference: pre_approval_reference.to_string(),
            status,
            credentials: credentials.clone(),
        };
        self.record(call, |s| &mut s.status_edits, || true)
    }

    async fn cancel_subscription(
        &self,
        pre_approval_reference: &str,
        credentials: &Credentials,
    ) -> Result<bool, SdkError> {
        let call = SdkCall::CancelSubscription {
            pre_approval_reference: pre_approval_reference.to_string(),
            credentials: credentials.clone(),
        };
        self.record(call, |s| &mut s.cancellations, || true)
    }

    async fn apply_discount(
        &self,
        pre_approval_reference: &str,
        discount: &Discount,
        credentials: &Credentials,
    ) -> Result<bool, SdkError> {
        let call = SdkCall::ApplyDiscount {
            pre_approval_reference: pre_approval_reference.to_string(),
            discount: *discount,
            credentials: credentials.clone(),
        };
        self.record(call, |s| &mut s.discounts, || true)
    }

    async fn get_notification(
        &self,
        notification_code: &str,
        credentials: &Credentials,
    ) -> Result<Option<NotificationData>, SdkError> {
        let call = SdkCall::GetNotification {
            notification_code: notification_code.to_string(),
            credentials: credentials.clone(),
        };
        self.record(call, |s| &mut s.notifications, || None)
    }

    async fn get_pre_approval_notification(
        &self,
        pre_approval_code: &str,
        credentials: &Credentials,
    ) -> Result<Option<NotificationData>, SdkError> {
        let call = SdkCall::GetPreApprovalNotification {
            pre_approval_code: pre_approval_code.to_string(),
            credentials: credentials.clone(),
        };
        self.record(call, |s| &mut s.pre_approval_notifications, || None)
    }
}
