//! Benchmark suite for account store operations
//!
//! Measures the linear-search operations on a store filled to capacity,
//! and the load and parse path for the initial dataset.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use atm_ledger::io::parse_records;
use atm_ledger::{AccountRecord, AccountStore};
use rust_decimal::Decimal;

fn main() {
    divan::main();
}

fn full_store(capacity: usize) -> AccountStore {
    let mut store = AccountStore::new(capacity);
    store.load(
        (0..capacity as u32).map(|i| AccountRecord::new(100000 + i, Decimal::new(10000, 2))),
    );
    store
}

/// Look up the last account, the worst case for a linear search
#[divan::bench(args = [15, 150, 1500])]
fn find_last(bencher: divan::Bencher, capacity: usize) {
    let store = full_store(capacity);
    let last = 100000 + capacity as u32 - 1;
    bencher.bench(|| divan::black_box(store.find(divan::black_box(last))));
}

/// Credit then debit the same amount on the last account
#[divan::bench(args = [15, 150, 1500])]
fn credit_debit_round_trip(bencher: divan::Bencher, capacity: usize) {
    let mut store = full_store(capacity);
    let last = 100000 + capacity as u32 - 1;
    let amount = Decimal::new(2500, 2);
    bencher.bench_local(|| {
        store.credit(last, amount).unwrap();
        store.debit(last, amount).unwrap();
    });
}

/// Parse and load a dataset that overflows the default capacity
#[divan::bench]
fn parse_and_load() {
    let input: String = (0..100)
        .map(|i| format!("{} {}.{:02}\n", 100000 + i, i * 7, i % 100))
        .collect();
    let mut store = AccountStore::default();
    let parsed = parse_records(divan::black_box(&input));
    divan::black_box(store.load(parsed.records));
}
