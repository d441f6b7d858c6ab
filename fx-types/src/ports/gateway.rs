//! Payment gateway port.

use crate::dto::PaymentResult;
use crate::error::GatewayError;

/// Port trait for card-charging gateways.
///
/// A decline comes back as a failed [`PaymentResult`]; an `Err` means the
/// gateway could not process the request at all.
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Attempts to charge `amount` against the given card token.
    async fn process_payment(
        &self,
        amount: f64,
        card_token: &str,
    ) -> Result<PaymentResult, GatewayError>;
}
