//! Ledger aggregate
//!
//! This module provides the `Ledger` that orchestrates account creation and
//! fund transfers by coordinating the AccountStore, TransactionLog, and
//! IdGenerator components.
//!
//! The ledger enforces the domain invariants:
//! - A successful transfer preserves the sum of the two balances involved
//! - A failed transfer mutates nothing and records nothing
//! - The transaction log only grows, one entry per successful transfer

use crate::core::account_store::{AccountStore, DEFAULT_CAPACITY};
use crate::core::id_generator::{IdGenerator, SequentialIdGenerator};
use crate::core::transaction_log::TransactionLog;
use crate::types::{Account, AccountId, LedgerError, Transaction, TransactionId};
use rust_decimal::Decimal;

/// In-memory ledger of accounts and transfers
///
/// Owns the account store, the transaction log, and the id generator used
/// to label new entities. The generator is a type parameter so tests and
/// callers can choose between sequential and random tokens; the default is
/// the sequential counter.
pub struct Ledger<G: IdGenerator = SequentialIdGenerator> {
    accounts: AccountStore,
    log: TransactionLog,
    id_generator: G,
}

impl Ledger<SequentialIdGenerator> {
    /// Create a ledger with sequential ids and the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a ledger with sequential ids bounded to `capacity` accounts
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_generator(SequentialIdGenerator::new(), capacity)
    }
}

impl<G: IdGenerator> Ledger<G> {
    /// Create a ledger using the given id generator
    ///
    /// # Arguments
    ///
    /// * `id_generator` - Source of account and transaction id tokens
    /// * `capacity` - Maximum number of accounts the ledger accepts
    pub fn with_generator(id_generator: G, capacity: usize) -> Self {
        Ledger {
            accounts: AccountStore::with_capacity(capacity),
            log: TransactionLog::new(),
            id_generator,
        }
    }

    /// Create a new account and return its id
    ///
    /// The owner name and initial balance are stored as given: any string
    /// and any sign are accepted.
    ///
    /// # Arguments
    ///
    /// * `owner_name` - Display name of the account owner
    /// * `initial_balance` - Starting balance (negative and zero included)
    ///
    /// # Returns
    ///
    /// * `Ok(AccountId)` - the id assigned to the new account
    /// * `Err(LedgerError::CapacityExceeded)` - the store is at capacity;
    ///   no account is created
    pub fn create_account(
        &mut self,
        owner_name: &str,
        initial_balance: Decimal,
    ) -> Result<AccountId, LedgerError> {
        // Check capacity before drawing an id so a rejected creation does
        // not consume a token.
        if self.accounts.is_full() {
            return Err(LedgerError::capacity_exceeded(self.accounts.capacity()));
        }

        let id = self.id_generator.generate_id();
        let account = Account::new(id.clone(), owner_name.to_string(), initial_balance);
        self.accounts.insert(account)?;

        Ok(id)
    }

    /// Move funds from one account to another
    ///
    /// Validation order, first failing check wins:
    /// 1. Both ids must resolve to stored accounts (source checked first)
    /// 2. The amount must be positive
    /// 3. The source balance must cover the amount
    /// 4. Neither the debit nor the credit may overflow
    ///
    /// All checks run before any mutation, so a failed transfer leaves
    /// every balance untouched and appends nothing to the log. On success
    /// the source is debited, the destination credited, and a transaction
    /// recorded.
    ///
    /// # Arguments
    ///
    /// * `from_account` - Id of the account to debit
    /// * `to_account` - Id of the account to credit
    /// * `amount` - Amount to move (must be positive)
    ///
    /// # Returns
    ///
    /// * `Ok(TransactionId)` - the id of the recorded transaction
    /// * `Err(LedgerError)` - the failed check; nothing was mutated
    pub fn transfer(
        &mut self,
        from_account: &str,
        to_account: &str,
        amount: Decimal,
    ) -> Result<TransactionId, LedgerError> {
        let source_balance = self
            .accounts
            .find(from_account)
            .ok_or_else(|| LedgerError::account_not_found(from_account))?
            .balance;
        let dest_balance = self
            .accounts
            .find(to_account)
            .ok_or_else(|| LedgerError::account_not_found(to_account))?
            .balance;

        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }

        if source_balance < amount {
            return Err(LedgerError::insufficient_funds(
                from_account,
                source_balance,
                amount,
            ));
        }

        let new_source_balance = source_balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("debit", from_account))?;

        // A self-transfer credits the balance the debit already lowered, so
        // it nets back to the starting value.
        let credit_base = if from_account == to_account {
            new_source_balance
        } else {
            dest_balance
        };
        let new_dest_balance = credit_base
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("credit", to_account))?;

        // Every check has passed; the two-step mutation below cannot fail.
        let source = self
            .accounts
            .find_mut(from_account)
            .ok_or_else(|| LedgerError::account_not_found(from_account))?;
        source.balance = new_source_balance;

        let dest = self
            .accounts
            .find_mut(to_account)
            .ok_or_else(|| LedgerError::account_not_found(to_account))?;
        dest.balance = new_dest_balance;

        let transaction = Transaction {
            id: self.id_generator.generate_id(),
            from_account: from_account.to_string(),
            to_account: to_account.to_string(),
            amount,
        };
        let transaction_id = transaction.id.clone();
        self.log.append(transaction);

        Ok(transaction_id)
    }

    /// Look up an account by id
    ///
    /// Linear scan over the store, first match by id equality.
    pub fn find_account(&self, id: &str) -> Option<&Account> {
        self.accounts.find(id)
    }

    /// Look up a recorded transaction by id
    pub fn find_transaction(&self, id: &str) -> Option<&Transaction> {
        self.log.find(id)
    }

    /// All accounts, in creation order
    pub fn accounts(&self) -> &[Account] {
        self.accounts.accounts()
    }

    /// All recorded transactions, in chronological order
    pub fn transactions(&self) -> &[Transaction] {
        self.log.entries()
    }
}

impl Default for Ledger<SequentialIdGenerator> {
    fn default() -> Self {
        Self::new()
    }
}
