//! Simulated payment gateway.

use uuid::Uuid;

use fx_types::{GatewayError, PaymentGateway, PaymentResult};

/// Token prefix that produces a declined charge.
pub const DECLINED_TOKEN_PREFIX: &str = "tok_declined";
/// Token prefix that produces a gateway outage.
pub const ERROR_TOKEN_PREFIX: &str = "tok_error";

/// Gateway whose outcome is determined by the card-token prefix, in the
/// style of a provider's test tokens: `tok_declined...` declines,
/// `tok_error...` fails outright, anything else is approved with a fresh
/// charge id.
#[derive(Debug, Default)]
pub struct SimulatedGateway;

impl SimulatedGateway {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn process_payment(
        &self,
        _amount: f64,
        card_token: &str,
    ) -> Result<PaymentResult, GatewayError> {
        if card_token.starts_with(ERROR_TOKEN_PREFIX) {
            return Err(GatewayError::Unavailable("simulated gateway outage".into()));
        }
        if card_token.starts_with(DECLINED_TOKEN_PREFIX) {
            return Ok(PaymentResult::failed("Card declined"));
        }
        Ok(PaymentResult::succeeded(format!(
            "ch_{}",
            Uuid::new_v4().simple()
        )))
    }
}
