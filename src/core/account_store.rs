//! Bounded account storage
//!
//! This module provides the `AccountStore` struct that holds every account
//! the ledger has created. The store enforces the ledger's capacity policy:
//! once the configured number of accounts exists, further insertions are
//! rejected with `CapacityExceeded`.
//!
//! Accounts are kept in creation order and looked up with a linear scan by
//! id. At the store's bounded size the scan is never a cost concern, and
//! the ordering is what the display layer reports.

use crate::types::{Account, LedgerError};

/// Default upper bound on the number of accounts a ledger holds
pub const DEFAULT_CAPACITY: usize = 10;

/// Holds all ledger accounts, up to a fixed capacity
///
/// Accounts are appended in creation order and never removed. Lookup is by
/// id equality, first match wins.
#[derive(Debug, Clone)]
pub struct AccountStore {
    /// Accounts in creation order
    accounts: Vec<Account>,

    /// Maximum number of accounts this store accepts
    capacity: usize,
}

impl AccountStore {
    /// Create a store with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a store bounded to `capacity` accounts
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of accounts the store will accept
    pub fn with_capacity(capacity: usize) -> Self {
        AccountStore {
            accounts: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// The configured capacity bound
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of accounts currently stored
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Whether the store has reached its capacity bound
    pub fn is_full(&self) -> bool {
        self.accounts.len() >= self.capacity
    }

    /// Append a new account
    ///
    /// # Arguments
    ///
    /// * `account` - The account to store
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the account was stored
    /// * `Err(LedgerError::CapacityExceeded)` if the store is full; the
    ///   account is not stored
    pub fn insert(&mut self, account: Account) -> Result<(), LedgerError> {
        if self.is_full() {
            return Err(LedgerError::capacity_exceeded(self.capacity));
        }

        self.accounts.push(account);
        Ok(())
    }

    /// Look up an account by id
    ///
    /// Linear scan over the store; returns the first account whose id
    /// matches.
    ///
    /// # Arguments
    ///
    /// * `id` - The account id to resolve
    ///
    /// # Returns
    ///
    /// * `Some(&Account)` if an account with the id exists
    /// * `None` otherwise
    pub fn find(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    /// Look up an account by id for mutation
    ///
    /// Same scan as [`find`](Self::find), returning a mutable reference.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.id == id)
    }

    /// All stored accounts, in creation order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}
