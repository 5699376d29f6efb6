//! Interactive session driver
//!
//! The Session runs the ATM menu loop over any input and output stream. It
//! reads one command at a time, collects and validates the operator's
//! answers, invokes exactly one `AccountStore` operation per action and
//! renders the outcome. Every store error is shown to the operator and the
//! loop carries on; only a failing output stream ends the session with an
//! error.
//!
//! # Examples
//!
//! ```
//! use atm_ledger::core::AccountStore;
//! use atm_ledger::session::Session;
//! use atm_ledger::types::AccountRecord;
//! use rust_decimal::Decimal;
//! use std::io::Cursor;
//!
//! let mut store = AccountStore::default();
//! store.load(vec![AccountRecord::new(123456, Decimal::new(50000, 2))]);
//!
//! let input = Cursor::new("w 123456 200.00\nq\n");
//! let mut output = Vec::new();
//! Session::new(&mut store, input, &mut output).run().unwrap();
//!
//! assert_eq!(store.balance(123456), Ok(Decimal::new(30000, 2)));
//! ```

use crate::core::AccountStore;
use crate::session::command::Command;
use crate::session::prompter::{parse_account_number, parse_amount, Prompter};
use crate::session::render;
use crate::types::{AccountNumber, LedgerError};
use std::io::{BufRead, Write};
use tracing::{debug, info};

const INVALID_INPUT: &str = "Invalid input. Please try again: ";
const UNKNOWN_ACCOUNT: &str = "Account does not exist or the input is invalid. Please try again: ";

/// Whether the menu loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive ATM session over a single account store
pub struct Session<'a, R, W> {
    store: &'a mut AccountStore,
    prompter: Prompter<R>,
    output: W,
    commands: usize,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(store: &'a mut AccountStore, input: R, output: W) -> Self {
        Session {
            store,
            prompter: Prompter::new(input),
            output,
            commands: 0,
        }
    }

    /// Run the menu loop until the operator quits or input runs out
    ///
    /// Prints the load banner and the initial account table, then processes
    /// commands. The caller is responsible for rendering the final report.
    ///
    /// # Returns
    ///
    /// The number of menu commands processed, including the final quit
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run(mut self) -> Result<usize, LedgerError> {
        writeln!(
            self.output,
            "Successfully read in {} accounts.",
            self.store.len()
        )?;
        writeln!(self.output, "Now printing the initial customer database...")?;
        write!(self.output, "{}", render::account_table(&self.store.snapshot()))?;

        loop {
            writeln!(
                self.output,
                "\nPlease select an option from the main menu below.\n"
            )?;
            write!(self.output, "{}", render::menu())?;
            self.output.flush()?;

            let Some(token) = self.prompter.next_token()? else {
                info!("input closed, ending session");
                break;
            };
            let Some(command) = Command::parse(&token) else {
                continue;
            };

            self.commands += 1;
            debug!(%command, "menu command");

            if self.dispatch(command)? == Flow::Quit {
                break;
            }
        }

        writeln!(self.output, "Printing updated customer database...")?;
        self.output.flush()?;
        Ok(self.commands)
    }

    fn dispatch(&mut self, command: Command) -> Result<Flow, LedgerError> {
        match command {
            Command::Withdraw => self.withdraw(),
            Command::Deposit => self.deposit(),
            Command::CreateAccount => self.create_account(),
            Command::ViewBalance => self.view_balance(),
            Command::DeleteAccount => self.delete_account(),
            Command::Quit => Ok(Flow::Quit),
            Command::Unknown(_) => {
                writeln!(self.output, "Incorrect option.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn withdraw(&mut self) -> Result<Flow, LedgerError> {
        let Some(number) = self.ask_existing_account()? else {
            return Ok(Flow::Quit);
        };
        let Some(amount) = self.ask("\nEnter withdrawal amount: ", parse_amount)? else {
            return Ok(Flow::Quit);
        };

        let balance = match self.store.balance(number) {
            Ok(balance) => balance,
            Err(e) => {
                self.report_error(&e)?;
                return Ok(Flow::Continue);
            }
        };
        match self.store.debit(number, amount) {
            Ok(new_balance) => {
                let receipt =
                    render::withdrawal_receipt(number, balance, amount, Some(new_balance));
                write!(self.output, "\n{}", receipt)?;
            }
            Err(LedgerError::InsufficientFunds { .. }) => {
                let receipt = render::withdrawal_receipt(number, balance, amount, None);
                write!(self.output, "\n{}", receipt)?;
            }
            Err(e) => self.report_error(&e)?,
        }

        writeln!(self.output, "\nReturning to main menu...")?;
        Ok(Flow::Continue)
    }

    fn deposit(&mut self) -> Result<Flow, LedgerError> {
        let Some(number) = self.ask("Please enter the account number: ", parse_account_number)?
        else {
            return Ok(Flow::Quit);
        };

        if self.store.find(number).is_none() {
            writeln!(self.output, "Account does not exist!")?;
            return Ok(Flow::Continue);
        }

        let Some(amount) = self.ask("Enter deposit amount: ", parse_amount)? else {
            return Ok(Flow::Quit);
        };

        match self.store.credit(number, amount) {
            Ok(new_balance) => writeln!(
                self.output,
                "Deposit successful. New Balance: {}",
                render::money(new_balance)
            )?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn view_balance(&mut self) -> Result<Flow, LedgerError> {
        let Some(number) = self.ask_existing_account()? else {
            return Ok(Flow::Quit);
        };

        let balance = match self.store.balance(number) {
            Ok(balance) => balance,
            Err(e) => {
                self.report_error(&e)?;
                return Ok(Flow::Continue);
            }
        };
        writeln!(self.output, "\nAccount found! Printing details now...")?;
        write!(self.output, "\n{}", render::balance_receipt(number, balance))?;
        writeln!(self.output, "\nReturning to main menu...")?;
        Ok(Flow::Continue)
    }

    fn create_account(&mut self) -> Result<Flow, LedgerError> {
        let prompt = "Please enter a 6-digit non-existing account number ranging from 100,000 to 999,999: ";
        let Some(number) = self.ask(prompt, parse_account_number)? else {
            return Ok(Flow::Quit);
        };

        match self.store.create(number) {
            Ok(account) => writeln!(
                self.output,
                "Account {} successfully created with a balance of {}.",
                account.number,
                render::money(account.balance)
            )?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn delete_account(&mut self) -> Result<Flow, LedgerError> {
        let Some(number) = self.ask("Please enter the account number: ", parse_account_number)?
        else {
            return Ok(Flow::Quit);
        };

        match self.store.delete(number) {
            Ok(_) => writeln!(self.output, "Account successfully deleted.")?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    /// Prompt until the answer parses, or return `None` at end of input
    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Option<T>, LedgerError> {
        writeln!(self.output, "{}", prompt)?;
        loop {
            self.output.flush()?;
            let Some(token) = self.prompter.next_token()? else {
                return Ok(None);
            };
            match parse(&token) {
                Some(value) => return Ok(Some(value)),
                None => writeln!(self.output, "{}", INVALID_INPUT)?,
            }
        }
    }

    /// Prompt until the operator names an active account
    fn ask_existing_account(&mut self) -> Result<Option<AccountNumber>, LedgerError> {
        let mut prompt = "\nPlease enter the account number: ";
        loop {
            let Some(number) = self.ask(prompt, parse_account_number)? else {
                return Ok(None);
            };
            if self.store.find(number).is_some() {
                return Ok(Some(number));
            }
            prompt = UNKNOWN_ACCOUNT;
        }
    }

    fn report_error(&mut self, error: &LedgerError) -> Result<(), LedgerError> {
        debug!(%error, "operation rejected");
        writeln!(self.output, "ERROR: {}", error)?;
        Ok(())
    }
}
