//! I/O module
//!
//! Handles reading the initial account data and writing snapshots.
//!
//! # Components
//!
//! - `ledger_format` - The whitespace-separated `(number, balance)` pair format
//! - `file_source` - Loading the initial dataset from a file and writing it back
//! - `csv_format` - CSV rendering of a snapshot

pub mod csv_format;
pub mod file_source;
pub mod ledger_format;

pub use csv_format::write_snapshot_csv;
pub use file_source::{load_records, save_records};
pub use ledger_format::{format_records, parse_records, ParsedRecords};
