//! Human-readable status line rendering
//!
//! This module centralizes the output-channel formatting: account creation
//! notices, balance summaries, transaction details, and the final transfer
//! result. All functions are pure writers over `&mut dyn Write` so tests
//! can capture the output in a buffer.
//!
//! The wording is not a compatibility contract; the facts are. Every line
//! carries the owner names, ids, amounts, and balances a caller needs to
//! follow what the ledger did.

use crate::types::{Account, Transaction};
use rust_decimal::Decimal;
use std::io::{self, Write};

/// Write the creation notice for a new account
///
/// Reports the owner name, the assigned id, and the initial balance.
pub fn write_account_created(output: &mut dyn Write, account: &Account) -> io::Result<()> {
    writeln!(
        output,
        "Account created for {} with ID: {} and initial balance: ${}",
        account.owner_name, account.id, account.balance
    )
}

/// Write a balance summary under a heading
///
/// Used for the before/after snapshots around a transfer. Each entry is an
/// owner name paired with the balance to report.
///
/// # Arguments
///
/// * `output` - Destination writer
/// * `heading` - Summary heading, e.g. "Before Transaction"
/// * `entries` - Owner name and balance pairs, in display order
pub fn write_balances(
    output: &mut dyn Write,
    heading: &str,
    entries: &[(String, Decimal)],
) -> io::Result<()> {
    writeln!(output, "\n{}:", heading)?;
    for (owner_name, balance) in entries {
        writeln!(output, "{}'s balance: ${}", owner_name, balance)?;
    }
    Ok(())
}

/// Write the detail block for a recorded transaction
///
/// Reports the transaction id, the amount, and both endpoints as owner
/// name plus account id.
pub fn write_transaction_details(
    output: &mut dyn Write,
    transaction: &Transaction,
    from_owner: &str,
    to_owner: &str,
) -> io::Result<()> {
    writeln!(output, "\nTransaction Details:")?;
    writeln!(output, "Transaction ID: {}", transaction.id)?;
    writeln!(
        output,
        "Amount ${} transferred from {} (ID: {}) to {} (ID: {}).",
        transaction.amount, from_owner, transaction.from_account, to_owner, transaction.to_account
    )
}

/// Write the final success/failure line for a transfer attempt
pub fn write_transfer_result(output: &mut dyn Write, success: bool) -> io::Result<()> {
    if success {
        writeln!(output, "\nTransaction was successful.")
    } else {
        writeln!(output, "\nTransaction failed.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn render<F>(write: F) -> String
    where
        F: FnOnce(&mut dyn Write) -> io::Result<()>,
    {
        let mut buffer = Vec::new();
        write(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_write_account_created() {
        let account = Account::new(
            "1".to_string(),
            "Alice".to_string(),
            Decimal::new(50000, 2),
        );

        let output = render(|w| write_account_created(w, &account));
        assert_eq!(
            output,
            "Account created for Alice with ID: 1 and initial balance: $500.00\n"
        );
    }

    #[test]
    fn test_write_balances() {
        let entries = vec![
            ("Alice".to_string(), Decimal::new(50000, 2)),
            ("Bob".to_string(), Decimal::new(30000, 2)),
        ];

        let output = render(|w| write_balances(w, "Before Transaction", &entries));
        assert_eq!(
            output,
            "\nBefore Transaction:\nAlice's balance: $500.00\nBob's balance: $300.00\n"
        );
    }

    #[test]
    fn test_write_balances_with_no_entries() {
        let output = render(|w| write_balances(w, "After Transaction", &[]));
        assert_eq!(output, "\nAfter Transaction:\n");
    }

    #[test]
    fn test_write_transaction_details() {
        let transaction = Transaction {
            id: "3".to_string(),
            from_account: "1".to_string(),
            to_account: "2".to_string(),
            amount: Decimal::new(15000, 2),
        };

        let output = render(|w| write_transaction_details(w, &transaction, "Alice", "Bob"));
        assert_eq!(
            output,
            "\nTransaction Details:\nTransaction ID: 3\nAmount $150.00 transferred from Alice (ID: 1) to Bob (ID: 2).\n"
        );
    }

    #[rstest]
    #[case::success(true, "\nTransaction was successful.\n")]
    #[case::failure(false, "\nTransaction failed.\n")]
    fn test_write_transfer_result(#[case] success: bool, #[case] expected: &str) {
        let output = render(|w| write_transfer_result(w, success));
        assert_eq!(output, expected);
    }
}
