//! Session module
//!
//! The interactive ATM front end that drives an `AccountStore`.
//!
//! # Components
//!
//! - `command` - Menu command parsing
//! - `prompter` - Token-based input reading and answer parsing
//! - `render` - Tables, menu and receipts
//! - `driver` - The menu loop itself

pub mod command;
pub mod driver;
pub mod prompter;
pub mod render;

pub use command::Command;
pub use driver::Session;
pub use prompter::Prompter;
