//! Command dispatcher.
//!
//! Turns a line of user input into a `Command` and runs it against the
//! address book, producing the text shown back to the user.

mod dispatcher;
mod parser;

pub use dispatcher::{CommandDispatcher, Reply};
pub use parser::Command;
