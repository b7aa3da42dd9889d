//! Contact Book - a command-line address book with validated phone numbers
//! and upcoming-birthday reminders.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`, `Birthday`)
//! - **models**: Contact `Record`s and the name-keyed `AddressBook`
//! - **storage**: Saving and loading the book as a JSON snapshot
//! - **commands**: Parsing and executing user commands
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;

pub use commands::{Command, CommandDispatcher, Reply};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record};
pub use storage::{BookStore, JsonFileStore};
