//! Menu commands

use std::fmt;

/// An action selected from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Withdraw,
    Deposit,
    CreateAccount,
    ViewBalance,
    DeleteAccount,
    Quit,
    /// Anything that is not a menu key
    Unknown(char),
}

impl Command {
    /// Parse a menu token
    ///
    /// Only the first character counts and case is ignored, so `w`, `W` and
    /// `withdraw` all select `Withdraw`. Returns `None` for an empty token.
    pub fn parse(token: &str) -> Option<Self> {
        let key = token.chars().next()?;
        let command = match key.to_ascii_uppercase() {
            'W' => Command::Withdraw,
            'D' => Command::Deposit,
            'N' => Command::CreateAccount,
            'B' => Command::ViewBalance,
            'X' => Command::DeleteAccount,
            'Q' => Command::Quit,
            _ => Command::Unknown(key),
        };
        Some(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Withdraw => write!(f, "WITHDRAW"),
            Command::Deposit => write!(f, "DEPOSIT"),
            Command::CreateAccount => write!(f, "CREATE NEW ACCOUNT"),
            Command::ViewBalance => write!(f, "VIEW BALANCE"),
            Command::DeleteAccount => write!(f, "DELETE ACCOUNT"),
            Command::Quit => write!(f, "QUIT SESSION"),
            Command::Unknown(key) => write!(f, "UNKNOWN ({})", key),
        }
    }
}
