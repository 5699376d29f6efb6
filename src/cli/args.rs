use crate::core::{StoreConfig, DEFAULT_CAPACITY};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// Interactive ATM over a bounded account ledger
#[derive(Parser, Debug)]
#[command(name = "atm-ledger")]
#[command(about = "Interactive ATM over a bounded account ledger", long_about = None)]
pub struct CliArgs {
    /// Account data file with whitespace-separated account number and balance pairs
    #[arg(
        value_name = "DATA_FILE",
        default_value = "database.txt",
        help = "Path to the account data file"
    )]
    pub data_file: PathBuf,

    /// Maximum number of active accounts
    #[arg(
        long = "capacity",
        value_name = "COUNT",
        default_value_t = DEFAULT_CAPACITY,
        help = "Maximum number of active accounts (default: 15)"
    )]
    pub capacity: usize,

    /// Format of the final account report
    #[arg(
        long = "report",
        value_name = "FORMAT",
        default_value = "table",
        help = "Final report format: 'table' for the console table or 'csv'"
    )]
    pub report: ReportFormat,

    /// Write the final accounts back to the data file
    #[arg(long = "save", help = "Write the final accounts back to DATA_FILE")]
    pub save: bool,

    /// Write the final accounts to a different file
    #[arg(
        long = "output",
        value_name = "PATH",
        help = "Write the final accounts to PATH (takes precedence over --save)"
    )]
    pub output: Option<PathBuf>,

    /// Default log filter when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level used when RUST_LOG is unset (error, warn, info, debug, trace)"
    )]
    pub log_level: String,
}

/// Available formats for the final account report
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Table,
    Csv,
}

impl CliArgs {
    /// Create a StoreConfig from CLI arguments
    ///
    /// A zero capacity falls back to the default (see `StoreConfig::new`).
    pub fn to_store_config(&self) -> StoreConfig {
        StoreConfig::new(self.capacity)
    }

    /// Where the final snapshot should be written, if anywhere
    pub fn write_back_path(&self) -> Option<&Path> {
        match (&self.output, self.save) {
            (Some(path), _) => Some(path.as_path()),
            (None, true) => Some(self.data_file.as_path()),
            (None, false) => None,
        }
    }
}
