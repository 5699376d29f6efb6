//! Account store module
//!
//! This module provides the `AccountStore` struct which owns every active
//! account and is the single point of mutation for account data.
//!
//! The AccountStore is responsible for:
//! - Bulk loading the initial dataset, up to capacity
//! - Creating and deleting accounts under the uniqueness, range and capacity rules
//! - Crediting and debiting balances without ever letting one go negative
//! - Producing an ordered snapshot for reporting and write-back
//!
//! Accounts are kept in a single `Vec` in insertion order. Deleting an account
//! compacts the vector, so later accounts shift down and the freed number can
//! be reused straight away.

use crate::types::{
    is_valid_account_number, Account, AccountNumber, AccountRecord, LedgerError, MONEY_SCALE,
};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Default maximum number of simultaneously active accounts
pub const DEFAULT_CAPACITY: usize = 15;

/// Configuration for an `AccountStore`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of active accounts
    pub capacity: usize,
}

impl StoreConfig {
    /// Create a new StoreConfig
    ///
    /// A capacity of zero would make the store useless, so it falls back to
    /// `DEFAULT_CAPACITY` with a warning.
    pub fn new(capacity: usize) -> Self {
        if capacity == 0 {
            warn!(
                "capacity must be at least 1, using default of {}",
                DEFAULT_CAPACITY
            );
            return Self::default();
        }
        StoreConfig { capacity }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Bounded, ordered collection of active accounts
///
/// Invariants upheld by every operation:
/// - `len() <= capacity()`
/// - account numbers are unique and lie in 100000..=999999
/// - balances are never negative and carry at most two fractional digits
#[derive(Debug, Clone)]
pub struct AccountStore {
    accounts: Vec<Account>,
    capacity: usize,
}

impl AccountStore {
    /// Create an empty store holding at most `capacity` accounts
    pub fn new(capacity: usize) -> Self {
        AccountStore {
            accounts: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Create an empty store from a `StoreConfig`
    pub fn with_config(config: StoreConfig) -> Self {
        Self::new(config.capacity)
    }

    /// Maximum number of active accounts
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of active accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.accounts.len() >= self.capacity
    }

    /// Initialize the store from an externally supplied sequence of records
    ///
    /// Any previous contents are discarded. Records are inserted in the order
    /// given until the store is full; the rest are dropped. A record is
    /// skipped (and logged) when its number is out of range, its balance is
    /// negative, or its number was already loaded, in which case the first
    /// record wins. Balances with more than two fractional digits are rounded
    /// to cents.
    ///
    /// # Arguments
    ///
    /// * `records` - The initial dataset, possibly empty
    ///
    /// # Returns
    ///
    /// The number of accounts actually loaded
    pub fn load<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = AccountRecord>,
    {
        self.accounts.clear();

        let mut records = records.into_iter();
        while !self.is_full() {
            let Some(record) = records.next() else {
                break;
            };

            if !is_valid_account_number(record.number) {
                warn!(number = record.number, "skipping record with invalid account number");
                continue;
            }
            if record.balance < Decimal::ZERO {
                warn!(
                    number = record.number,
                    balance = %record.balance,
                    "skipping record with negative balance"
                );
                continue;
            }
            if self.find(record.number).is_some() {
                warn!(number = record.number, "skipping duplicate account record");
                continue;
            }

            self.accounts.push(Account {
                number: record.number,
                balance: record.balance.round_dp(MONEY_SCALE),
            });
        }

        let dropped = records.count();
        if dropped > 0 {
            warn!(
                dropped,
                capacity = self.capacity,
                "account store is full, remaining records were not loaded"
            );
        }

        debug!(loaded = self.accounts.len(), "loaded accounts");
        self.accounts.len()
    }

    /// Find the position of an active account
    ///
    /// Linear search over active accounts. Not finding an account is an
    /// ordinary outcome, so it is reported as `None` rather than an error.
    pub fn find(&self, number: AccountNumber) -> Option<usize> {
        self.accounts
            .iter()
            .position(|account| account.number == number)
    }

    /// Get a copy of an active account
    pub fn get(&self, number: AccountNumber) -> Option<Account> {
        self.find(number).map(|index| self.accounts[index])
    }

    /// Open a new account with a zero balance
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - `InvalidNumber` if the number is outside 100000..=999999
    /// - `DuplicateAccount` if an active account already has the number
    /// - `OutOfCapacity` if the store is full
    pub fn create(&mut self, number: AccountNumber) -> Result<Account, LedgerError> {
        if !is_valid_account_number(number) {
            return Err(LedgerError::invalid_number(number));
        }
        if self.find(number).is_some() {
            return Err(LedgerError::duplicate_account(number));
        }
        if self.is_full() {
            return Err(LedgerError::out_of_capacity(self.capacity));
        }

        let account = Account::new(number);
        self.accounts.push(account);

        debug!(number, count = self.accounts.len(), "created account");
        Ok(account)
    }

    /// Withdraw funds from an account
    ///
    /// The withdrawal is all-or-nothing: when the amount exceeds the balance
    /// nothing is debited.
    ///
    /// # Returns
    ///
    /// The new balance
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if the amount is not positive or finer than cents
    /// - `AccountNotFound` if no active account has the number
    /// - `InsufficientFunds` if the amount exceeds the current balance
    pub fn debit(
        &mut self,
        number: AccountNumber,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        let amount = validate_amount(amount)?;
        let account = self.account_mut(number)?;

        if amount > account.balance {
            return Err(LedgerError::insufficient_funds(
                number,
                account.balance,
                amount,
            ));
        }

        account.balance -= amount;

        debug!(number, %amount, balance = %account.balance, "debited account");
        Ok(account.balance)
    }

    /// Deposit funds into an account
    ///
    /// # Returns
    ///
    /// The new balance
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if the amount is not positive or finer than cents
    /// - `AccountNotFound` if no active account has the number
    /// - `ArithmeticOverflow` if the balance would exceed the Decimal range
    pub fn credit(
        &mut self,
        number: AccountNumber,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        let amount = validate_amount(amount)?;
        let account = self.account_mut(number)?;

        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("credit", number))?;

        debug!(number, %amount, balance = %account.balance, "credited account");
        Ok(account.balance)
    }

    /// Current balance of an account
    pub fn balance(&self, number: AccountNumber) -> Result<Decimal, LedgerError> {
        self.get(number)
            .map(|account| account.balance)
            .ok_or_else(|| LedgerError::account_not_found(number))
    }

    /// Close an account
    ///
    /// Only an account whose balance is exactly zero may be closed. On success
    /// the account is removed, later accounts keep their relative order, and
    /// the number becomes available to `create` again.
    ///
    /// # Returns
    ///
    /// The removed account
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if no active account has the number
    /// - `NonZeroBalance` if the balance is not zero
    pub fn delete(&mut self, number: AccountNumber) -> Result<Account, LedgerError> {
        let index = self
            .find(number)
            .ok_or_else(|| LedgerError::account_not_found(number))?;

        let balance = self.accounts[index].balance;
        if !balance.is_zero() {
            return Err(LedgerError::non_zero_balance(number, balance));
        }

        let account = self.accounts.remove(index);

        debug!(number, count = self.accounts.len(), "deleted account");
        Ok(account)
    }

    /// Active accounts in insertion order
    pub fn snapshot(&self) -> Vec<AccountRecord> {
        self.accounts.iter().map(Account::to_record).collect()
    }

    fn account_mut(&mut self, number: AccountNumber) -> Result<&mut Account, LedgerError> {
        self.accounts
            .iter_mut()
            .find(|account| account.number == number)
            .ok_or_else(|| LedgerError::account_not_found(number))
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::with_config(StoreConfig::default())
    }
}

/// Accept only positive amounts expressible in whole cents
fn validate_amount(amount: Decimal) -> Result<Decimal, LedgerError> {
    if amount <= Decimal::ZERO || amount.normalize().scale() > MONEY_SCALE {
        return Err(LedgerError::invalid_amount(amount));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn dollars(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    fn store_with(records: &[(AccountNumber, i64)]) -> AccountStore {
        let mut store = AccountStore::default();
        store.load(
            records
                .iter()
                .map(|&(number, cents)| AccountRecord::new(number, dollars(cents))),
        );
        store
    }

    fn assert_no_negative_balances(store: &AccountStore) {
        for record in store.snapshot() {
            assert!(
                record.balance >= Decimal::ZERO,
                "account {} went negative: {}",
                record.number,
                record.balance
            );
        }
    }

    #[test]
    fn test_new_creates_empty_store() {
        let store = AccountStore::default();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.capacity(), DEFAULT_CAPACITY);
        assert!(store.snapshot().is_empty());
    }

    #[rstest]
    #[case::custom(5, 5)]
    #[case::zero_falls_back(0, DEFAULT_CAPACITY)]
    fn test_store_config(#[case] requested: usize, #[case] expected: usize) {
        let store = AccountStore::with_config(StoreConfig::new(requested));
        assert_eq!(store.capacity(), expected);
    }

    #[test]
    fn test_load_preserves_order_and_returns_count() {
        let mut store = AccountStore::default();
        let loaded = store.load(vec![
            AccountRecord::new(345678, dollars(100)),
            AccountRecord::new(123456, dollars(50000)),
            AccountRecord::new(234567, dollars(0)),
        ]);

        assert_eq!(loaded, 3);
        let numbers: Vec<_> = store.snapshot().iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![345678, 123456, 234567]);
    }

    #[test]
    fn test_load_empty_source_is_valid() {
        let mut store = AccountStore::default();
        assert_eq!(store.load(Vec::new()), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_stops_at_capacity() {
        let mut store = AccountStore::new(3);
        let records = (0..5).map(|i| AccountRecord::new(100000 + i, dollars(100)));

        assert_eq!(store.load(records), 3);
        let numbers: Vec<_> = store.snapshot().iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![100000, 100001, 100002]);
    }

    #[test]
    fn test_load_replaces_previous_contents() {
        let mut store = store_with(&[(123456, 100)]);
        store.load(vec![AccountRecord::new(654321, dollars(200))]);

        assert!(store.find(123456).is_none());
        assert_eq!(store.len(), 1);
    }

    #[rstest]
    #[case::out_of_range_number(AccountRecord::new(12345, Decimal::ONE))]
    #[case::negative_balance(AccountRecord::new(123456, Decimal::new(-100, 2)))]
    fn test_load_skips_invalid_records(#[case] bad: AccountRecord) {
        let mut store = AccountStore::default();
        let loaded = store.load(vec![bad, AccountRecord::new(654321, Decimal::ONE)]);

        assert_eq!(loaded, 1);
        assert_eq!(store.snapshot(), vec![AccountRecord::new(654321, Decimal::ONE)]);
    }

    #[test]
    fn test_load_keeps_first_of_duplicate_numbers() {
        let mut store = AccountStore::default();
        let loaded = store.load(vec![
            AccountRecord::new(123456, dollars(100)),
            AccountRecord::new(123456, dollars(999)),
        ]);

        assert_eq!(loaded, 1);
        assert_eq!(store.balance(123456), Ok(dollars(100)));
    }

    #[test]
    fn test_load_rounds_balances_to_cents() {
        let mut store = AccountStore::default();
        store.load(vec![AccountRecord::new(123456, Decimal::new(10126, 3))]);

        assert_eq!(store.balance(123456), Ok(dollars(1013)));
    }

    #[test]
    fn test_find_returns_index_or_none() {
        let store = store_with(&[(123456, 0), (234567, 0)]);

        assert_eq!(store.find(123456), Some(0));
        assert_eq!(store.find(234567), Some(1));
        assert_eq!(store.find(345678), None);
    }

    #[test]
    fn test_create_then_find_reports_zero_balance() {
        let mut store = AccountStore::default();

        let account = store.create(123456).unwrap();

        assert_eq!(account, Account::new(123456));
        assert!(store.find(123456).is_some());
        assert_eq!(store.balance(123456), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_create_twice_is_duplicate() {
        let mut store = AccountStore::default();

        store.create(123456).unwrap();
        let result = store.create(123456);

        assert_eq!(result, Err(LedgerError::duplicate_account(123456)));
        assert_eq!(store.len(), 1);
    }

    #[rstest]
    #[case::too_small(99_999)]
    #[case::too_large(1_000_000)]
    #[case::far_too_large(999_999_999)]
    #[case::zero(0)]
    fn test_create_rejects_invalid_number(#[case] number: AccountNumber) {
        let mut store = AccountStore::default();

        assert_eq!(store.create(number), Err(LedgerError::invalid_number(number)));
        assert!(store.is_empty());
    }

    #[rstest]
    #[case::lower_bound(100_000)]
    #[case::upper_bound(999_999)]
    fn test_create_accepts_range_bounds(#[case] number: AccountNumber) {
        let mut store = AccountStore::default();
        assert!(store.create(number).is_ok());
    }

    #[test]
    fn test_create_out_of_capacity() {
        let mut store = AccountStore::default();
        for i in 0..15 {
            store.create(100000 + i).unwrap();
        }

        assert!(store.is_full());
        assert_eq!(
            store.create(555555),
            Err(LedgerError::out_of_capacity(15))
        );
        assert_eq!(store.len(), 15);
    }

    #[test]
    fn test_create_checks_duplicate_before_capacity() {
        let mut store = AccountStore::new(1);
        store.create(123456).unwrap();

        assert_eq!(
            store.create(123456),
            Err(LedgerError::duplicate_account(123456))
        );
    }

    #[test]
    fn test_debit_decreases_balance() {
        let mut store = store_with(&[(123456, 50000)]);

        assert_eq!(store.debit(123456, dollars(20000)), Ok(dollars(30000)));
        assert_eq!(store.balance(123456), Ok(dollars(30000)));
    }

    #[test]
    fn test_debit_entire_balance() {
        let mut store = store_with(&[(123456, 1050)]);

        assert_eq!(store.debit(123456, dollars(1050)), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_debit_with_insufficient_funds_leaves_balance() {
        let mut store = store_with(&[(123456, 5000)]);

        let result = store.debit(123456, dollars(5001));

        assert_eq!(
            result,
            Err(LedgerError::insufficient_funds(123456, dollars(5000), dollars(5001)))
        );
        assert_eq!(store.balance(123456), Ok(dollars(5000)));
    }

    #[test]
    fn test_debit_unknown_account() {
        let mut store = store_with(&[(123456, 5000)]);

        assert_eq!(
            store.debit(654321, dollars(100)),
            Err(LedgerError::account_not_found(654321))
        );
    }

    #[rstest]
    #[case::zero(Decimal::ZERO)]
    #[case::negative(Decimal::new(-100, 2))]
    #[case::sub_cent(Decimal::new(1001, 3))]
    fn test_invalid_amounts_are_rejected(#[case] amount: Decimal) {
        let mut store = store_with(&[(123456, 5000)]);

        assert_eq!(
            store.debit(123456, amount),
            Err(LedgerError::invalid_amount(amount))
        );
        assert_eq!(
            store.credit(123456, amount),
            Err(LedgerError::invalid_amount(amount))
        );
        assert_eq!(store.balance(123456), Ok(dollars(5000)));
    }

    #[test]
    fn test_amount_validated_before_lookup() {
        let mut store = AccountStore::default();

        assert_eq!(
            store.debit(123456, Decimal::ZERO),
            Err(LedgerError::invalid_amount(Decimal::ZERO))
        );
    }

    #[test]
    fn test_trailing_zero_amount_is_accepted() {
        let mut store = store_with(&[(123456, 0)]);

        // 1.500 normalizes to 1.5
        assert_eq!(store.credit(123456, Decimal::new(1500, 3)), Ok(dollars(150)));
    }

    #[test]
    fn test_credit_increases_balance() {
        let mut store = store_with(&[(123456, 1000)]);

        assert_eq!(store.credit(123456, dollars(250)), Ok(dollars(1250)));
        assert_eq!(store.credit(123456, dollars(5)), Ok(dollars(1255)));
    }

    #[test]
    fn test_credit_unknown_account() {
        let mut store = AccountStore::default();

        assert_eq!(
            store.credit(123456, dollars(100)),
            Err(LedgerError::account_not_found(123456))
        );
    }

    #[test]
    fn test_credit_overflow_leaves_balance() {
        let mut store = AccountStore::default();
        store.load(vec![AccountRecord::new(123456, Decimal::MAX)]);

        let result = store.credit(123456, Decimal::ONE);

        assert_eq!(result, Err(LedgerError::arithmetic_overflow("credit", 123456)));
        assert_eq!(store.balance(123456), Ok(Decimal::MAX));
    }

    #[test]
    fn test_credit_then_debit_round_trip() {
        let mut store = store_with(&[(123456, 12345)]);

        store.credit(123456, dollars(777)).unwrap();
        store.debit(123456, dollars(777)).unwrap();

        assert_eq!(store.balance(123456), Ok(dollars(12345)));
    }

    #[test]
    fn test_balance_unknown_account() {
        let store = AccountStore::default();
        assert_eq!(
            store.balance(123456),
            Err(LedgerError::account_not_found(123456))
        );
    }

    #[test]
    fn test_delete_zero_balance_frees_number() {
        let mut store = store_with(&[(123456, 0)]);

        assert_eq!(store.delete(123456), Ok(Account::new(123456)));
        assert!(store.find(123456).is_none());
        assert!(store.is_empty());

        assert!(store.create(123456).is_ok());
        assert_eq!(store.balance(123456), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_delete_non_zero_balance_keeps_account() {
        let mut store = store_with(&[(123456, 1000)]);

        assert_eq!(
            store.delete(123456),
            Err(LedgerError::non_zero_balance(123456, dollars(1000)))
        );
        assert_eq!(store.balance(123456), Ok(dollars(1000)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_single_cent_is_non_zero() {
        let mut store = store_with(&[(123456, 1)]);

        assert!(matches!(
            store.delete(123456),
            Err(LedgerError::NonZeroBalance { .. })
        ));
    }

    #[test]
    fn test_delete_after_draining_balance() {
        let mut store = store_with(&[(123456, 1010)]);

        store.debit(123456, dollars(100)).unwrap();
        store.debit(123456, dollars(910)).unwrap();

        assert!(store.delete(123456).is_ok());
    }

    #[test]
    fn test_delete_unknown_account() {
        let mut store = AccountStore::default();
        assert_eq!(
            store.delete(123456),
            Err(LedgerError::account_not_found(123456))
        );
    }

    #[test]
    fn test_delete_compacts_and_keeps_order() {
        let mut store = store_with(&[(111111, 0), (222222, 0), (333333, 0)]);

        store.delete(222222).unwrap();

        let numbers: Vec<_> = store.snapshot().iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![111111, 333333]);
        assert_eq!(store.find(333333), Some(1));
    }

    #[test]
    fn test_delete_makes_room_when_full() {
        let mut store = AccountStore::new(2);
        store.create(111111).unwrap();
        store.create(222222).unwrap();
        assert!(store.create(333333).is_err());

        store.delete(111111).unwrap();

        assert!(store.create(333333).is_ok());
    }

    #[test]
    fn test_end_to_end_example() {
        let mut store = store_with(&[(123456, 50000), (234567, 0)]);
        assert_eq!(store.len(), 2);

        assert_eq!(store.debit(123456, dollars(20000)), Ok(dollars(30000)));

        assert!(store.delete(234567).is_ok());
        assert_eq!(store.len(), 1);

        assert!(store.create(234567).is_ok());
        assert_eq!(store.balance(234567), Ok(Decimal::ZERO));
        assert_eq!(store.len(), 2);

        assert_eq!(
            store.create(999_999_999),
            Err(LedgerError::invalid_number(999_999_999))
        );
    }

    #[test]
    fn test_balances_never_negative_over_mixed_operations() {
        let mut store = store_with(&[(123456, 1000), (234567, 0)]);

        let _ = store.debit(123456, dollars(600));
        let _ = store.debit(123456, dollars(600));
        let _ = store.debit(234567, dollars(1));
        let _ = store.credit(234567, dollars(99));
        let _ = store.debit(234567, dollars(100));
        let _ = store.debit(234567, dollars(99));
        let _ = store.create(345678);
        let _ = store.debit(345678, dollars(1));

        assert_no_negative_balances(&store);
        assert_eq!(store.balance(123456), Ok(dollars(400)));
        assert_eq!(store.balance(234567), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_snapshot_has_no_side_effects() {
        let store = store_with(&[(123456, 100), (234567, 200)]);

        let first = store.snapshot();
        let second = store.snapshot();

        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![
                AccountRecord::new(123456, dollars(100)),
                AccountRecord::new(234567, dollars(200)),
            ]
        );
    }
}
