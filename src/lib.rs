//! Transfer Ledger Library
//! # Overview
//!
//! This library provides a minimal in-memory ledger: it creates named
//! accounts and moves funds between them, recording every successful
//! transfer in an append-only log.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Transaction, LedgerError)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Account creation and transfer orchestration
//!   - [`core::account_store`] - Bounded account storage
//!   - [`core::transaction_log`] - Append-only transfer history
//!   - [`core::id_generator`] - Identifier token generation
//! - [`report`] - Human-readable status line rendering
//! - [`demo`] - The fixed demonstration script run by the binary
//!
//! # Invariants
//!
//! - A successful transfer preserves the sum of the two balances involved.
//! - A failed transfer mutates no balance and records no transaction.
//! - The transaction log is append-only; entries are never changed.
//! - The account store never exceeds its configured capacity.

// Module declarations
pub mod cli;
pub mod core;
pub mod demo;
pub mod report;
pub mod types;

pub use core::{
    AccountStore, IdGenerator, Ledger, RandomIdGenerator, SequentialIdGenerator, TransactionLog,
    DEFAULT_CAPACITY,
};
pub use types::{Account, AccountId, LedgerError, Transaction, TransactionId};
