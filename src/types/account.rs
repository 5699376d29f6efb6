//! Account-related types for the ATM ledger
//!
//! This module defines the Account structure, the raw record exchanged with
//! data sources, and the numeric rules an account number must follow.

use rust_decimal::Decimal;
use std::fmt;

/// Account number
///
/// Valid account numbers are exactly six digits (100000-999999). The wider
/// integer type lets callers pass out-of-range numbers so the store can
/// reject them explicitly.
pub type AccountNumber = u32;

/// Smallest valid account number
pub const MIN_ACCOUNT_NUMBER: AccountNumber = 100_000;

/// Largest valid account number
pub const MAX_ACCOUNT_NUMBER: AccountNumber = 999_999;

/// Number of fractional digits kept for balances and amounts
pub const MONEY_SCALE: u32 = 2;

/// Check whether `number` lies in the six-digit account range
pub fn is_valid_account_number(number: AccountNumber) -> bool {
    (MIN_ACCOUNT_NUMBER..=MAX_ACCOUNT_NUMBER).contains(&number)
}

/// An active customer account
///
/// Accounts are owned by the `AccountStore`; callers only ever see copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Account {
    /// Six-digit account number, unique among active accounts
    pub number: AccountNumber,

    /// Current balance
    ///
    /// Never negative and never carries more than two fractional digits.
    pub balance: Decimal,
}

impl Account {
    /// Create a new account with a zero balance
    pub fn new(number: AccountNumber) -> Self {
        Account {
            number,
            balance: Decimal::ZERO,
        }
    }

    /// Convert the account into the raw pair used for import and export
    pub fn to_record(&self) -> AccountRecord {
        AccountRecord {
            number: self.number,
            balance: self.balance,
        }
    }
}

/// Raw `(number, balance)` pair
///
/// This is the only shape data takes when it crosses the store boundary:
/// the initial data source produces a sequence of records and `snapshot()`
/// hands a sequence back. A record carries no invariants of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountRecord {
    pub number: AccountNumber,
    pub balance: Decimal,
}

impl AccountRecord {
    pub fn new(number: AccountNumber, balance: Decimal) -> Self {
        AccountRecord { number, balance }
    }
}

impl fmt::Display for AccountRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.number, self.balance)
    }
}
