//! ATM Ledger CLI
//!
//! Interactive console ATM over a bounded set of customer accounts.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- database.txt
//! cargo run -- --capacity 20 --save database.txt
//! cargo run -- --report csv --output final.txt database.txt < commands.txt
//! ```
//!
//! The program loads accounts from the data file, runs the ATM menu on
//! stdin/stdout, then prints the updated accounts. A missing or unreadable
//! data file starts the session with no accounts.
//!
//! # Logging
//!
//! Diagnostics go to stderr. `RUST_LOG` takes precedence over `--log-level`.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (console I/O failure, report or write-back could not be written).
//!   The report and write-back are still attempted after a console failure.

use atm_ledger::cli;
use atm_ledger::io::{load_records, save_records};
use atm_ledger::report::write_report;
use atm_ledger::{AccountStore, Session};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    init_logging(&args.log_level);

    let mut store = AccountStore::with_config(args.to_store_config());
    store.load(load_records(&args.data_file));

    // The session owns stdin/stdout until the operator quits. A console
    // failure still falls through to the report and write-back so completed
    // transactions are not lost.
    let session_result = {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        Session::new(&mut store, stdin.lock(), stdout.lock()).run()
    };
    if let Err(e) = &session_result {
        eprintln!("Error: {}", e);
    }

    let snapshot = store.snapshot();

    let mut output = std::io::stdout();
    if let Err(e) = write_report(args.report, &snapshot, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    if let Some(path) = args.write_back_path() {
        if let Err(e) = save_records(path, &snapshot) {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }

    if session_result.is_err() {
        process::exit(1);
    }
}

/// Install the stderr tracing subscriber
fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
