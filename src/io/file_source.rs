//! File-backed account source
//!
//! Loads the initial dataset from a text file and writes a snapshot back to
//! one. Format concerns are delegated to the `ledger_format` module.
//!
//! # Error Handling
//!
//! An unavailable data source is not fatal: the ledger starts with zero
//! accounts and the problem is logged. A malformed tail is logged and the
//! records read before it are kept. Write-back failures are returned to the
//! caller because the operator explicitly asked for them.

use crate::io::ledger_format::{format_records, parse_records};
use crate::types::{AccountRecord, LedgerError};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use tracing::{error, info, warn};

/// Read the initial dataset from `path`
///
/// # Returns
///
/// The records in file order, or an empty vector if the file could not be
/// read at all
pub fn load_records(path: &Path) -> Vec<AccountRecord> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            error!(
                path = %path.display(),
                "failed to read account data, starting with no accounts: {}",
                e
            );
            return Vec::new();
        }
    };

    let parsed = parse_records(&contents);
    if let Some(e) = parsed.error {
        warn!(
            path = %path.display(),
            kept = parsed.records.len(),
            "stopped reading account data: {}",
            e
        );
    }

    info!(path = %path.display(), count = parsed.records.len(), "read account records");
    parsed.records
}

/// Write `records` to `path`, replacing any previous contents
pub fn save_records(path: &Path, records: &[AccountRecord]) -> Result<(), LedgerError> {
    let file = File::create(path).map_err(|e| LedgerError::IoError {
        message: format!("Failed to create file '{}': {}", path.display(), e),
    })?;

    let mut writer = BufWriter::new(file);
    format_records(records, &mut writer)?;

    info!(path = %path.display(), count = records.len(), "saved account records");
    Ok(())
}
