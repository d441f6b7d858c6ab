//! # Fx Memory
//!
//! In-memory implementations of the fx service ports. Useful for tests,
//! demos, and local development - no network, no database, deterministic
//! where determinism matters.
//!
//! - [`FixedRateProvider`] - rate table configured at construction
//! - [`InMemoryTransactionStore`] - DashMap-backed store issuing uuid ids
//! - [`SimulatedGateway`] - charge outcomes driven by card-token prefix

mod gateway;
mod rates;
mod store;

pub use gateway::SimulatedGateway;
pub use rates::FixedRateProvider;
pub use store::InMemoryTransactionStore;
