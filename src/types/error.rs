//! Error types for the transfer ledger
//!
//! This module defines all error conditions a ledger operation can report.
//! Every variant is recoverable by the caller: a failed operation leaves
//! the ledger untouched and never aborts the process.
//!
//! # Error Categories
//!
//! - **Capacity**: the account store is at its configured bound
//! - **Lookup**: a transfer named an account id that does not resolve
//! - **Validation**: non-positive amounts, insufficient funds
//! - **Arithmetic**: a balance update would overflow

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for ledger operations
///
/// Each variant carries the context needed to diagnose the failure from
/// its Display output alone, since diagnostics are reported as single
/// lines on the error channel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// The account store is at capacity
    ///
    /// No account is created; the store keeps exactly `capacity` entries.
    #[error("Cannot create more accounts: ledger capacity of {capacity} reached")]
    CapacityExceeded {
        /// The configured account-store bound
        capacity: usize,
    },

    /// A transfer referenced an account id that does not resolve
    ///
    /// Reported for source and destination alike; the id names the
    /// offending reference.
    #[error("Account '{id}' not found")]
    AccountNotFound {
        /// The id that failed to resolve
        id: String,
    },

    /// The source account cannot cover the transfer amount
    #[error(
        "Insufficient funds in account '{account}': balance {balance}, requested {requested}"
    )]
    InsufficientFunds {
        /// Id of the source account
        account: String,
        /// Source balance at the time of the attempt
        balance: Decimal,
        /// Requested transfer amount
        requested: Decimal,
    },

    /// The transfer amount is zero or negative
    #[error("Invalid transfer amount {amount}: amount must be positive")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// A balance update would overflow
    ///
    /// Checked before any mutation, so the transfer is rejected whole.
    #[error("Arithmetic overflow in {operation} for account '{account}'")]
    ArithmeticOverflow {
        /// Operation that would overflow ("debit" or "credit")
        operation: String,
        /// Id of the affected account
        account: String,
    },
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create a CapacityExceeded error
    pub fn capacity_exceeded(capacity: usize) -> Self {
        LedgerError::CapacityExceeded { capacity }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(id: &str) -> Self {
        LedgerError::AccountNotFound { id: id.to_string() }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: &str, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            account: account.to_string(),
            balance,
            requested,
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        LedgerError::InvalidAmount { amount }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account: account.to_string(),
        }
    }
}
