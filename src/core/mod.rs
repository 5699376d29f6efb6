//! Core business logic module
//!
//! This module contains the account ledger components:
//! - `account_store` - The bounded account collection and every operation that mutates it

pub mod account_store;

pub use account_store::{AccountStore, StoreConfig, DEFAULT_CAPACITY};
