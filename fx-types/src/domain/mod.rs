//! Pure domain types.
//!
//! No IO, no port knowledge - just the data and arithmetic the
//! orchestration flows are defined over.

mod money;
mod transaction;

pub use money::round_to_cents;
pub use transaction::ExchangeTransaction;
