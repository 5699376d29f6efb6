//! Plain-text account format
//!
//! The initial data source and the optional write-back file share one
//! format: whitespace-separated pairs of an integer account number followed
//! by a decimal balance. Line breaks carry no meaning, so `123456 500.00`
//! and `123456\n500.00` are the same record.
//!
//! All functions are pure (no file access) for easy testing.

use crate::types::{AccountNumber, AccountRecord, LedgerError};
use rust_decimal::Decimal;
use std::io::Write;
use std::str::FromStr;

/// Result of parsing an account source
///
/// Parsing never discards what it has already read: when a malformed token
/// is hit, the records before it are kept and `error` describes where
/// parsing stopped.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecords {
    /// Records read before end of input or the first malformed pair
    pub records: Vec<AccountRecord>,
    /// Why parsing stopped early, if it did
    pub error: Option<LedgerError>,
}

/// Parse whitespace-separated `(number, balance)` pairs
///
/// Tokens are consumed two at a time while the first parses as an account
/// number and the second as a decimal. The first pair that does not is
/// reported through `ParsedRecords::error` and ends parsing; a lone trailing
/// token is treated the same way.
pub fn parse_records(input: &str) -> ParsedRecords {
    let mut records = Vec::new();
    let mut tokens = input.split_whitespace().enumerate();

    while let Some((index, number_token)) = tokens.next() {
        let number = match AccountNumber::from_str(number_token) {
            Ok(number) => number,
            Err(_) => {
                return stopped(
                    records,
                    index,
                    format!("expected an account number, found '{}'", number_token),
                )
            }
        };

        let Some((index, balance_token)) = tokens.next() else {
            return stopped(
                records,
                index + 1,
                format!("account {} has no balance", number),
            );
        };

        let balance = match Decimal::from_str(balance_token) {
            Ok(balance) => balance,
            Err(_) => {
                return stopped(
                    records,
                    index,
                    format!(
                        "expected a balance for account {}, found '{}'",
                        number, balance_token
                    ),
                )
            }
        };

        records.push(AccountRecord::new(number, balance));
    }

    ParsedRecords {
        records,
        error: None,
    }
}

fn stopped(records: Vec<AccountRecord>, index: usize, message: String) -> ParsedRecords {
    ParsedRecords {
        records,
        error: Some(LedgerError::parse_error(Some(index + 1), message)),
    }
}

/// Write records one pair per line, balances with two decimals
pub fn format_records(
    records: &[AccountRecord],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    for record in records {
        writeln!(output, "{}", record)?;
    }
    output.flush()?;
    Ok(())
}
