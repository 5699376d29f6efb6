//! Final account report
//!
//! Selects how the closing snapshot is rendered based on the report format
//! chosen on the command line.

use crate::cli::ReportFormat;
use crate::io::csv_format::write_snapshot_csv;
use crate::session::render::account_table;
use crate::types::{AccountRecord, LedgerError};
use std::io::Write;

/// Write the final account report in the requested format
///
/// # Arguments
///
/// * `format` - Console table or CSV
/// * `records` - Snapshot of the active accounts
/// * `output` - Mutable reference to a writer for the report
pub fn write_report(
    format: ReportFormat,
    records: &[AccountRecord],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    match format {
        ReportFormat::Table => {
            output.write_all(account_table(records).as_bytes())?;
            output.flush()?;
            Ok(())
        }
        ReportFormat::Csv => write_snapshot_csv(records, output),
    }
}
