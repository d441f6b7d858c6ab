//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod gateway;
mod rates;
mod store;

pub use gateway::PaymentGateway;
pub use rates::RateProvider;
pub use store::TransactionStore;
