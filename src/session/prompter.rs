//! Token-based console input
//!
//! Reads whitespace-separated tokens from any `BufRead`, a line at a time.
//! Several answers may share a line (`w 123456 20.00`), and blank lines are
//! skipped. Bytes that are not valid UTF-8 are replaced rather than treated
//! as a read failure, so they surface as a token that fails to parse. All
//! scanner state for the session lives here and never reaches the account
//! store.

use crate::types::{AccountNumber, LedgerError};
use rust_decimal::Decimal;
use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

/// Whitespace tokenizer over an input stream
#[derive(Debug)]
pub struct Prompter<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Prompter<R> {
    pub fn new(input: R) -> Self {
        Prompter {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once the input is exhausted
    pub fn next_token(&mut self) -> Result<Option<String>, LedgerError> {
        while self.pending.is_empty() {
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
        Ok(self.pending.pop_front())
    }
}

/// Parse an operator-typed account number
///
/// Any run of digits is a number. One too large for `AccountNumber`
/// saturates to `AccountNumber::MAX`, which is out of range, so the store
/// rejects it as an invalid number instead of the input being re-prompted.
pub fn parse_account_number(token: &str) -> Option<AccountNumber> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(AccountNumber::from_str(token).unwrap_or(AccountNumber::MAX))
}

/// Parse an operator-typed amount, allowing a leading `$`
pub fn parse_amount(token: &str) -> Option<Decimal> {
    let token = token.strip_prefix('$').unwrap_or(token);
    Decimal::from_str(token).ok()
}
