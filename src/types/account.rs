//! Account types for the transfer ledger
//!
//! This module defines the Account structure representing a single named
//! account and its current balance.

use super::transaction::AccountId;
use rust_decimal::Decimal;

/// A single ledger account
///
/// The id is assigned by the ledger at creation and never changes, and the
/// owner name is likewise immutable. The balance changes only through the
/// initial creation value and validated transfers.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Opaque identifier assigned by the ledger at creation
    pub id: AccountId,

    /// Display name of the account owner
    pub owner_name: String,

    /// Current balance
    ///
    /// Stored as a `Decimal` so repeated transfers stay exact. May be
    /// negative or zero: the ledger does not validate the initial value.
    pub balance: Decimal,
}

impl Account {
    /// Create a new account
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier assigned by the ledger
    /// * `owner_name` - Display name of the account owner
    /// * `balance` - Initial balance (any sign accepted)
    pub fn new(id: AccountId, owner_name: String, balance: Decimal) -> Self {
        Account {
            id,
            owner_name,
            balance,
        }
    }
}
