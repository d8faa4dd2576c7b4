//! Append-only transfer history
//!
//! This module provides the `TransactionLog` that records every successful
//! transfer in the order it happened. Entries are appended by the ledger
//! and never mutated or deleted afterwards, so the log's order is the
//! chronological order of successful transfers.

use crate::types::Transaction;

/// Ordered, append-only record of successful transfers
#[derive(Debug, Clone, Default)]
pub struct TransactionLog {
    /// Transactions in the order they were recorded
    entries: Vec<Transaction>,
}

impl TransactionLog {
    /// Create an empty log
    pub fn new() -> Self {
        TransactionLog {
            entries: Vec::new(),
        }
    }

    /// Append a transaction to the end of the log
    ///
    /// # Arguments
    ///
    /// * `transaction` - The completed transfer record to append
    pub fn append(&mut self, transaction: Transaction) {
        self.entries.push(transaction);
    }

    /// Look up a recorded transaction by id
    ///
    /// # Returns
    ///
    /// * `Some(&Transaction)` if an entry with the id exists
    /// * `None` otherwise
    pub fn find(&self, id: &str) -> Option<&Transaction> {
        self.entries.iter().find(|transaction| transaction.id == id)
    }

    /// Number of recorded transactions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All recorded transactions, in chronological order
    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }
}
