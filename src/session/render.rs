//! Console rendering
//!
//! Pure functions that turn store results into the text shown to the
//! operator. Nothing here touches the store or performs I/O.

use crate::types::{AccountNumber, AccountRecord};
use rust_decimal::Decimal;

const RULE: &str = "==============================";
const TABLE_RULE: &str = "-----------------------";

/// Format an amount as dollars with two decimals
pub fn money(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

/// Render the customer database table
pub fn account_table(records: &[AccountRecord]) -> String {
    let mut output = String::new();
    output.push_str(TABLE_RULE);
    output.push('\n');
    output.push_str("|  CUSTOMER DATABASE  |\n");
    output.push_str(TABLE_RULE);
    output.push('\n');
    output.push_str(&format!("| {:<7}  | {:<7}  |\n", "ACCOUNT", "BALANCE"));
    output.push_str(TABLE_RULE);
    output.push('\n');

    for record in records {
        output.push_str(&format!(
            "| {:>7}  | ${:>7} |\n",
            record.number,
            format!("{:.2}", record.balance)
        ));
    }

    output.push_str(TABLE_RULE);
    output.push('\n');
    output
}

/// Render the main menu
pub fn menu() -> &'static str {
    "\tATM MENU\n\
     \t========\n\
     [W] - WITHDRAW\n\
     [D] - DEPOSIT\n\
     [N] - CREATE NEW ACCOUNT\n\
     [B] - VIEW BALANCE\n\
     [X] - DELETE ACCOUNT\n\
     [Q] - QUIT SESSION\n"
}

/// Receipt for a completed or voided withdrawal
///
/// `new_balance` is `None` when the withdrawal was voided for lack of funds.
pub fn withdrawal_receipt(
    number: AccountNumber,
    balance: Decimal,
    amount: Decimal,
    new_balance: Option<Decimal>,
) -> String {
    let outcome = match new_balance {
        Some(new_balance) => format!("New Balance: {}", money(new_balance)),
        None => "ERROR: Insufficient Funds - Transaction Voided".to_string(),
    };

    format!(
        "{RULE}\n\
         Transaction Type: WITHDRAW\n\
         Account Number: {number}\n\
         Current Balance: {}\n\
         Amount to Withdraw: {}\n\
         {outcome}\n\
         {RULE}\n",
        money(balance),
        money(amount),
    )
}

/// Receipt for a balance inquiry
pub fn balance_receipt(number: AccountNumber, balance: Decimal) -> String {
    format!(
        "{RULE}\n\
         Transaction Type: View Balance\n\
         Account Number: {number}\n\
         Current Total Balance: {}\n\
         {RULE}\n",
        money(balance),
    )
}
