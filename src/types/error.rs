//! Error types for the ATM ledger
//!
//! This module defines all error types that can occur while loading, mutating
//! or exporting accounts. Errors are designed to be descriptive and
//! user-friendly for console output.
//!
//! # Error Categories
//!
//! - **Account Errors**: Invalid or duplicate numbers, unknown accounts, capacity exhaustion
//! - **Balance Errors**: Invalid amounts, insufficient funds, non-zero balance on delete
//! - **Arithmetic Errors**: Overflow in balance calculations
//! - **I/O and Parse Errors**: Unreadable data source, malformed records, failed export

use crate::types::account::{AccountNumber, MAX_ACCOUNT_NUMBER, MIN_ACCOUNT_NUMBER};
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger
///
/// Every account store operation returns one of these variants on failure.
/// All domain variants are recoverable: the store is left unchanged and the
/// caller decides how to report the outcome.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Account number is outside the six-digit range
    #[error(
        "Invalid account number {number}: must be between {} and {}",
        MIN_ACCOUNT_NUMBER,
        MAX_ACCOUNT_NUMBER
    )]
    InvalidNumber {
        /// The rejected account number
        number: AccountNumber,
    },

    /// An active account already uses this number
    #[error("Account {number} already exists")]
    DuplicateAccount {
        /// The duplicated account number
        number: AccountNumber,
    },

    /// The store already holds `capacity` active accounts
    #[error("Account store is full (capacity {capacity})")]
    OutOfCapacity {
        /// Capacity of the store
        capacity: usize,
    },

    /// No active account has this number
    #[error("Account {number} does not exist")]
    AccountNotFound {
        /// The account number that was not found
        number: AccountNumber,
    },

    /// Amount is zero, negative or finer than cents
    #[error("Invalid amount {amount}: must be positive with at most two decimal places")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Withdrawal exceeds the current balance
    ///
    /// The withdrawal is rejected and the balance remains unchanged.
    #[error("Insufficient funds in account {number}: balance {balance:.2}, requested {requested:.2}")]
    InsufficientFunds {
        /// Account number
        number: AccountNumber,
        /// Current balance
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Only accounts with a zero balance may be deleted
    #[error("Account {number} has a non-zero balance of {balance:.2}")]
    NonZeroBalance {
        /// Account number
        number: AccountNumber,
        /// Current balance
        balance: Decimal,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected to maintain account integrity.
    #[error("Arithmetic overflow in {operation} for account {number}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        number: AccountNumber,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Malformed input in the account data source or report
    #[error("Parse error{}: {message}", position.map(|p| format!(" at token {}", p)).unwrap_or_default())]
    ParseError {
        /// 1-based token position where parsing stopped (if available)
        position: Option<usize>,
        /// Description of the parsing error
        message: String,
    },
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to LedgerError
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidNumber error
    pub fn invalid_number(number: AccountNumber) -> Self {
        LedgerError::InvalidNumber { number }
    }

    /// Create a DuplicateAccount error
    pub fn duplicate_account(number: AccountNumber) -> Self {
        LedgerError::DuplicateAccount { number }
    }

    /// Create an OutOfCapacity error
    pub fn out_of_capacity(capacity: usize) -> Self {
        LedgerError::OutOfCapacity { capacity }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(number: AccountNumber) -> Self {
        LedgerError::AccountNotFound { number }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        LedgerError::InvalidAmount { amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(number: AccountNumber, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            number,
            balance,
            requested,
        }
    }

    /// Create a NonZeroBalance error
    pub fn non_zero_balance(number: AccountNumber, balance: Decimal) -> Self {
        LedgerError::NonZeroBalance { number, balance }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, number: AccountNumber) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            number,
        }
    }

    /// Create a ParseError
    pub fn parse_error(position: Option<usize>, message: impl Into<String>) -> Self {
        LedgerError::ParseError {
            position,
            message: message.into(),
        }
    }
}
