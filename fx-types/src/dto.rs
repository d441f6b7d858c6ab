//! Request and response objects crossing the service boundary.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Exchange DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to exchange an amount from one currency to another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRequest {
    /// User requesting the exchange
    pub user_id: String,
    /// Currency to sell (e.g. "USD")
    pub from_currency: String,
    /// Currency to buy (e.g. "EUR")
    pub to_currency: String,
    /// Amount to sell, in major units
    pub amount: f64,
}

impl ExchangeRequest {
    /// All fields present and the amount strictly positive.
    pub fn is_valid(&self) -> bool {
        !self.user_id.is_empty()
            && !self.from_currency.is_empty()
            && !self.to_currency.is_empty()
            && self.amount > 0.0
    }
}

/// Outcome of an exchange request.
///
/// Exactly one of the two shapes is ever produced: a success carries the
/// store-issued transaction id and the rounded exchanged amount and no
/// error message, a failure carries only the message. The constructors
/// below are the only way this crate builds one, so the shape holds by
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeResponse {
    pub success: bool,
    /// Opaque identifier issued by the transaction store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Amount bought, rounded to 2 decimals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchanged_amount: Option<f64>,
    /// Human-readable reason the exchange was not performed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ExchangeResponse {
    /// Builds the success shape.
    pub fn succeeded(transaction_id: impl Into<String>, exchanged_amount: f64) -> Self {
        Self {
            success: true,
            transaction_id: Some(transaction_id.into()),
            exchanged_amount: Some(exchanged_amount),
            error_message: None,
        }
    }

    /// Builds the failure shape.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            transaction_id: None,
            exchanged_amount: None,
            error_message: Some(message.into()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to charge a card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// User being charged
    pub user_id: String,
    /// Charge amount, in major units of `currency`
    pub amount: f64,
    /// Opaque card token from the tokenization provider
    pub card_token: String,
    /// ISO currency code (e.g. "USD")
    pub currency: String,
}

/// Outcome of a payment, either from validation or from the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResult {
    pub success: bool,
    /// Gateway-issued charge identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Human-readable reason the charge was not made
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl PaymentResult {
    /// Builds the success shape.
    pub fn succeeded(transaction_id: impl Into<String>) -> Self {
        Self {
            success: true,
            transaction_id: Some(transaction_id.into()),
            error_message: None,
        }
    }

    /// Builds the failure shape.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            transaction_id: None,
            error_message: Some(message.into()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payment policy
// ─────────────────────────────────────────────────────────────────────────────

/// Business rules the payment service enforces before touching the gateway.
///
/// Passed to the service at construction so deployments can widen the
/// currency set or the limit without a code change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentPolicy {
    /// Currencies the service will charge in
    pub supported_currencies: Vec<String>,
    /// Largest single charge, in major units
    pub max_amount: f64,
}

impl PaymentPolicy {
    pub fn supports(&self, currency: &str) -> bool {
        self.supported_currencies.iter().any(|c| c == currency)
    }
}

impl Default for PaymentPolicy {
    fn default() -> Self {
        Self {
            supported_currencies: vec!["USD".into(), "EUR".into(), "GBP".into()],
            max_amount: 10_000.0,
        }
    }
}
