//! Exchange transaction record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A completed currency exchange, as handed to the transaction store.
///
/// Built exactly once per successful exchange, immediately before
/// persistence. The record is immutable once created - it is a historical
/// statement of what was exchanged, at what rate, and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeTransaction {
    /// User who requested the exchange
    pub user_id: String,
    /// Currency sold
    pub from_currency: String,
    /// Currency bought
    pub to_currency: String,
    /// Amount sold, in major units of `from_currency`
    pub from_amount: f64,
    /// Amount bought, rounded to 2 decimals of `to_currency`
    pub to_amount: f64,
    /// Rate applied (`to_amount ~= from_amount * exchange_rate`)
    pub exchange_rate: f64,
    /// When the exchange was performed
    pub timestamp: DateTime<Utc>,
}

impl ExchangeTransaction {
    /// Creates a new record stamped with the current time.
    pub fn new(
        user_id: impl Into<String>,
        from_currency: impl Into<String>,
        to_currency: impl Into<String>,
        from_amount: f64,
        to_amount: f64,
        exchange_rate: f64,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            from_currency: from_currency.into(),
            to_currency: to_currency.into(),
            from_amount,
            to_amount,
            exchange_rate,
            timestamp: Utc::now(),
        }
    }
}
