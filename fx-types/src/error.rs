//! Error types for the port contracts.
//!
//! Each collaborator fails with its own typed error. The exchange service
//! collapses all of these into a single generic failure response; the
//! payment service lets `GatewayError` propagate to its caller.

/// Rate provider failures.
#[derive(Debug, thiserror::Error)]
pub enum RateError {
    #[error("Rate not available for {from} -> {to}")]
    RateNotAvailable { from: String, to: String },

    #[error("Rate service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Transaction store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Transaction rejected: {0}")]
    Rejected(String),
}

/// Payment gateway failures.
///
/// A declined card is NOT an error - the gateway reports that as a failed
/// [`PaymentResult`](crate::dto::PaymentResult). These variants cover the
/// gateway itself being unable to answer.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Gateway unavailable: {0}")]
    Unavailable(String),

    #[error("Gateway rejected the request: {0}")]
    Rejected(String),
}
