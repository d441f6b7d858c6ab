//! Fixed in-process rate table.

use dashmap::DashMap;

use fx_types::{RateError, RateProvider};

/// Rate provider backed by a table configured up front.
///
/// Pairs are directional: a USD->EUR entry says nothing about EUR->USD.
/// Identical from/to codes resolve to 1.0 unless an explicit entry
/// overrides them. Any rate can be stored, including non-positive ones,
/// so callers can exercise the rate-validation path of the exchange flow.
pub struct FixedRateProvider {
    rates: DashMap<(String, String), f64>,
}

impl FixedRateProvider {
    /// Creates an empty rate table.
    pub fn new() -> Self {
        Self {
            rates: DashMap::new(),
        }
    }

    /// Adds a rate for a directional currency pair.
    pub fn with_rate(self, from: impl Into<String>, to: impl Into<String>, rate: f64) -> Self {
        self.rates.insert((from.into(), to.into()), rate);
        self
    }

    /// Replaces the rate for a pair on a live provider.
    pub fn set_rate(&self, from: impl Into<String>, to: impl Into<String>, rate: f64) {
        self.rates.insert((from.into(), to.into()), rate);
    }
}

impl Default for FixedRateProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl RateProvider for FixedRateProvider {
    async fn get_exchange_rate(&self, from: &str, to: &str) -> Result<f64, RateError> {
        if let Some(rate) = self.rates.get(&(from.to_string(), to.to_string())) {
            return Ok(*rate);
        }
        if from == to {
            return Ok(1.0);
        }
        Err(RateError::RateNotAvailable {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}
