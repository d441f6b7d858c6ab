//! In-memory transaction store.

use std::sync::atomic::{AtomicBool, Ordering};

use dashmap::DashMap;
use uuid::Uuid;

use fx_types::{ExchangeTransaction, StoreError, TransactionStore};

/// Transaction store keeping records in a concurrent map, keyed by the
/// uuid id it issues per save.
///
/// `fail_next_save` flips the next save into a simulated outage, which is
/// how tests drive the persistence-failure path of the exchange flow.
pub struct InMemoryTransactionStore {
    transactions: DashMap<String, ExchangeTransaction>,
    fail_next: AtomicBool,
}

impl InMemoryTransactionStore {
    pub fn new() -> Self {
        Self {
            transactions: DashMap::new(),
            fail_next: AtomicBool::new(false),
        }
    }

    /// Makes the next `save_transaction` call fail.
    pub fn fail_next_save(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Looks up a record by the id `save_transaction` returned.
    pub fn get(&self, transaction_id: &str) -> Option<ExchangeTransaction> {
        self.transactions
            .get(transaction_id)
            .map(|entry| entry.clone())
    }
}

impl Default for InMemoryTransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TransactionStore for InMemoryTransactionStore {
    async fn save_transaction(
        &self,
        transaction: &ExchangeTransaction,
    ) -> Result<String, StoreError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Unavailable("simulated store outage".into()));
        }

        let id = Uuid::new_v4().to_string();
        self.transactions.insert(id.clone(), transaction.clone());
        Ok(id)
    }
}
