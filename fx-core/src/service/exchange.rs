//! Currency exchange service.
//!
//! Orchestrates one exchange request through the rate provider and the
//! transaction store. Contains NO infrastructure logic - pure business
//! orchestration.

use fx_types::{
    ExchangeRequest, ExchangeResponse, ExchangeTransaction, RateProvider, TransactionStore,
    round_to_cents,
};

/// Returned when the request itself is malformed.
pub const MSG_INVALID_REQUEST: &str = "Invalid request parameters";
/// Returned when the rate source answers with a non-positive rate.
pub const MSG_INVALID_RATE: &str = "Invalid exchange rate";
/// Returned for any collaborator failure; the cause is logged, not exposed.
pub const MSG_INTERNAL_ERROR: &str = "Internal error occurred";

/// Application service for currency exchanges.
///
/// Generic over `R: RateProvider` and `S: TransactionStore` - the adapters
/// are injected at compile time. This enables:
/// - Swapping rate sources and stores without code changes
/// - Testing with in-memory implementations
/// - Compile-time checks for port implementation
pub struct ExchangeService<R: RateProvider, S: TransactionStore> {
    rates: R,
    store: S,
}

impl<R: RateProvider, S: TransactionStore> ExchangeService<R, S> {
    /// Creates a new exchange service with the given collaborators.
    pub fn new(rates: R, store: S) -> Self {
        Self { rates, store }
    }

    /// Returns a reference to the injected rate provider.
    pub fn rates(&self) -> &R {
        &self.rates
    }

    /// Returns a reference to the injected transaction store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Executes one exchange request.
    ///
    /// Never fails at the signature level: every outcome, including
    /// collaborator failures, comes back as a structured [`ExchangeResponse`].
    /// Per invocation this makes exactly one rate call and at most one store
    /// call, both skipped when validation rejects the request.
    #[tracing::instrument(
        skip(self, request),
        fields(user_id = %request.user_id, from = %request.from_currency, to = %request.to_currency)
    )]
    pub async fn execute(&self, request: ExchangeRequest) -> ExchangeResponse {
        if !request.is_valid() {
            return ExchangeResponse::failed(MSG_INVALID_REQUEST);
        }

        let rate = match self
            .rates
            .get_exchange_rate(&request.from_currency, &request.to_currency)
            .await
        {
            Ok(rate) => rate,
            Err(err) => {
                tracing::warn!(error = %err, "rate lookup failed");
                return ExchangeResponse::failed(MSG_INTERNAL_ERROR);
            }
        };

        if rate <= 0.0 {
            tracing::warn!(rate, "rate source returned a non-positive rate");
            return ExchangeResponse::failed(MSG_INVALID_RATE);
        }

        let exchanged_amount = round_to_cents(request.amount * rate);

        let transaction = ExchangeTransaction::new(
            request.user_id,
            request.from_currency,
            request.to_currency,
            request.amount,
            exchanged_amount,
            rate,
        );

        match self.store.save_transaction(&transaction).await {
            Ok(transaction_id) => {
                tracing::debug!(%transaction_id, exchanged_amount, "exchange recorded");
                ExchangeResponse::succeeded(transaction_id, exchanged_amount)
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to persist transaction");
                ExchangeResponse::failed(MSG_INTERNAL_ERROR)
            }
        }
    }
}
