//! Transaction types for the transfer ledger
//!
//! This module defines the identifier aliases used throughout the system
//! and the immutable transaction record appended to the ledger's log after
//! every successful transfer.

use rust_decimal::Decimal;

/// Account identifier
///
/// An opaque string token assigned by the ledger's id generator.
pub type AccountId = String;

/// Transaction identifier
///
/// An opaque string token assigned by the ledger's id generator.
pub type TransactionId = String;

/// Record of one successful transfer
///
/// Created only as a side effect of a successful transfer and immutable
/// afterwards. The account fields reference stored accounts by id; they do
/// not own the accounts.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Identifier assigned when the transfer was recorded
    pub id: TransactionId,

    /// Id of the debited account
    pub from_account: AccountId,

    /// Id of the credited account
    pub to_account: AccountId,

    /// Amount moved from source to destination (always positive)
    pub amount: Decimal,
}
