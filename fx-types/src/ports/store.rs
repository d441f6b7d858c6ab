//! Transaction store port.
//!
//! Durable storage of completed exchanges lives behind this trait.
//! Adapters (database-backed, in-memory) implement it; the exchange
//! service only ever hands over a finished record.

use crate::domain::ExchangeTransaction;
use crate::error::StoreError;

/// Port trait for persisting exchange transactions.
#[async_trait::async_trait]
pub trait TransactionStore: Send + Sync {
    /// Persists a completed transaction and returns an opaque identifier.
    async fn save_transaction(
        &self,
        transaction: &ExchangeTransaction,
    ) -> Result<String, StoreError>;
}
