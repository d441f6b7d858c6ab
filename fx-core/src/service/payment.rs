//! Payment service.
//!
//! Validates a charge request against the configured policy and delegates
//! to the payment gateway.

use fx_types::{GatewayError, PaymentGateway, PaymentPolicy, PaymentRequest, PaymentResult};

/// Returned when the charge amount is zero or negative.
pub const MSG_INVALID_AMOUNT: &str = "Invalid amount";

/// Application service for card payments.
///
/// Generic over `G: PaymentGateway`, with the business rules injected as a
/// [`PaymentPolicy`] at construction.
///
/// Unlike the exchange flow, gateway failures are NOT swallowed here: a
/// [`GatewayError`] surfaces to the caller unchanged, while policy
/// violations come back as a failed [`PaymentResult`].
pub struct PaymentService<G: PaymentGateway> {
    gateway: G,
    policy: PaymentPolicy,
}

impl<G: PaymentGateway> PaymentService<G> {
    /// Creates a new payment service with the given gateway and policy.
    pub fn new(gateway: G, policy: PaymentPolicy) -> Self {
        Self { gateway, policy }
    }

    /// Returns a reference to the injected gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Returns the policy this service enforces.
    pub fn policy(&self) -> &PaymentPolicy {
        &self.policy
    }

    /// Executes one payment request.
    ///
    /// Policy checks run in a fixed order and the first violation wins; the
    /// gateway is only called once every check passes, and its result is
    /// returned verbatim.
    #[tracing::instrument(
        skip(self, request),
        fields(user_id = %request.user_id, currency = %request.currency, amount = request.amount)
    )]
    pub async fn execute(&self, request: PaymentRequest) -> Result<PaymentResult, GatewayError> {
        if request.amount <= 0.0 {
            return Ok(PaymentResult::failed(MSG_INVALID_AMOUNT));
        }

        if !self.policy.supports(&request.currency) {
            return Ok(PaymentResult::failed(format!(
                "Currency {} not supported",
                request.currency
            )));
        }

        if request.amount > self.policy.max_amount {
            return Ok(PaymentResult::failed(format!(
                "Amount exceeds maximum limit of {}",
                self.policy.max_amount
            )));
        }

        self.gateway
            .process_payment(request.amount, &request.card_token)
            .await
    }
}
