//! ATM Ledger Library
//! # Overview
//!
//! This library provides a bounded, in-memory account ledger and the
//! interactive ATM session that drives it.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, AccountRecord, LedgerError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::account_store`] - The capacity-bounded account collection and its operations
//! - [`io`] - Loading the initial dataset, writing snapshots back, CSV output
//! - [`session`] - The menu-driven operator session
//! - [`report`] - Final report rendering
//!
//! # Operations
//!
//! The account store supports:
//!
//! - **Load**: Bulk initialization from `(number, balance)` pairs, up to capacity
//! - **Find**: Locate an active account by number
//! - **Create**: Open a new six-digit account with a zero balance
//! - **Debit**: Withdraw funds (never below zero)
//! - **Credit**: Deposit funds
//! - **Balance**: Read the current balance
//! - **Delete**: Close an account whose balance is exactly zero
//! - **Snapshot**: List the active accounts in insertion order
//!
//! # Account Rules
//!
//! - Account numbers lie in 100000..=999999 and are unique
//! - Balances are `Decimal` values with two fractional digits, never negative
//! - At most `capacity` accounts (15 by default) are active at once

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod report;
pub mod session;
pub mod types;

pub use crate::core::{AccountStore, StoreConfig};
pub use crate::io::{load_records, save_records};
pub use session::Session;
pub use types::{Account, AccountNumber, AccountRecord, LedgerError};
