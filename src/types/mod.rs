//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account records, account numbers and money helpers
//! - `error`: Error types for the ledger

pub mod account;
pub mod error;

pub use account::{
    is_valid_account_number, Account, AccountNumber, AccountRecord, MAX_ACCOUNT_NUMBER,
    MIN_ACCOUNT_NUMBER, MONEY_SCALE,
};
pub use error::LedgerError;
