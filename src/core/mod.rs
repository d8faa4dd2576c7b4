//! Core business logic module
//!
//! This module contains the ledger's components:
//! - `id_generator` - Identifier token generation
//! - `account_store` - Bounded account storage
//! - `transaction_log` - Append-only transfer history
//! - `ledger` - Account creation and transfer orchestration

pub mod account_store;
pub mod id_generator;
pub mod ledger;
pub mod transaction_log;

pub use account_store::{AccountStore, DEFAULT_CAPACITY};
pub use id_generator::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use ledger::Ledger;
pub use transaction_log::TransactionLog;
