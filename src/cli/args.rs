use crate::core::DEFAULT_CAPACITY;
use clap::Parser;
use rust_decimal::Decimal;

/// Run the in-memory ledger demonstration
#[derive(Parser, Debug)]
#[command(name = "transfer-ledger")]
#[command(about = "Create two demo accounts and transfer funds between them", long_about = None)]
pub struct CliArgs {
    /// Maximum number of accounts the ledger accepts
    #[arg(
        long = "capacity",
        value_name = "COUNT",
        default_value_t = DEFAULT_CAPACITY,
        help = "Maximum number of accounts the ledger accepts"
    )]
    pub capacity: usize,

    /// Amount moved by the demonstration transfer
    #[arg(
        long = "amount",
        value_name = "AMOUNT",
        default_value = "150.00",
        help = "Amount transferred from the first demo account to the second"
    )]
    pub amount: Decimal,

    /// Label new accounts and transactions with random UUID tokens
    #[arg(
        long = "random-ids",
        help = "Assign random UUID tokens instead of sequential ids"
    )]
    pub random_ids: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults_reproduce_the_fixed_script() {
        let parsed = CliArgs::try_parse_from(["program"]).unwrap();

        assert_eq!(parsed.capacity, DEFAULT_CAPACITY);
        assert_eq!(parsed.amount, Decimal::new(15000, 2));
        assert!(!parsed.random_ids);
    }

    #[rstest]
    #[case::capacity(&["program", "--capacity", "3"], 3)]
    #[case::default_capacity(&["program"], DEFAULT_CAPACITY)]
    fn test_capacity_parsing(#[case] args: &[&str], #[case] expected: usize) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.capacity, expected);
    }

    #[rstest]
    #[case::integral(&["program", "--amount", "99"], Decimal::new(99, 0))]
    #[case::fractional(&["program", "--amount", "99.95"], Decimal::new(9995, 2))]
    fn test_amount_parsing(#[case] args: &[&str], #[case] expected: Decimal) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.amount, expected);
    }

    #[test]
    fn test_random_ids_flag() {
        let parsed = CliArgs::try_parse_from(["program", "--random-ids"]).unwrap();
        assert!(parsed.random_ids);
    }

    #[rstest]
    #[case::malformed_amount(&["program", "--amount", "lots"])]
    #[case::malformed_capacity(&["program", "--capacity", "-1"])]
    #[case::unknown_flag(&["program", "--verbose"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
