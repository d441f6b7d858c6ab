//! Exchange rate provider port.
//!
//! This trait defines the interface for exchange rate sources.
//! Implementations can be HTTP clients, static tables, mock providers, etc.

use crate::error::RateError;

/// Port trait for exchange rate providers.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync {
    /// Gets the exchange rate from one currency to another.
    /// Returns how many units of `to` currency one unit of `from` buys.
    async fn get_exchange_rate(&self, from: &str, to: &str) -> Result<f64, RateError>;
}
