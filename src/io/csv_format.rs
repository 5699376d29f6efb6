//! CSV report output
//!
//! Serializes an account snapshot as CSV with columns `account,balance`.
//! Rows keep snapshot order and balances always show two decimals.

use crate::types::{AccountNumber, AccountRecord, LedgerError};
use serde::Serialize;
use std::io::Write;

/// One output row of the CSV report
#[derive(Debug, Serialize)]
struct CsvRow {
    account: AccountNumber,
    balance: String,
}

impl From<&AccountRecord> for CsvRow {
    fn from(record: &AccountRecord) -> Self {
        CsvRow {
            account: record.number,
            balance: format!("{:.2}", record.balance),
        }
    }
}

/// Write an account snapshot in CSV format
///
/// # Arguments
///
/// * `records` - Snapshot to write, in the order it should appear
/// * `output` - Mutable reference to a writer for outputting CSV
pub fn write_snapshot_csv(
    records: &[AccountRecord],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    // serialize() only emits a header alongside the first row
    if records.is_empty() {
        writer.write_record(["account", "balance"])?;
    }

    for record in records {
        writer.serialize(CsvRow::from(record))?;
    }

    writer.flush()?;
    Ok(())
}
