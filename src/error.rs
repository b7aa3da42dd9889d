//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by record and address book operations.
///
/// Every operation that returns one of these leaves its receiver unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A phone number or birthday failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact is filed under the given name
    #[error("contact not found")]
    ContactNotFound(String),

    /// The record has no such phone number
    #[error("phone number not found")]
    PhoneNotFound(String),
}

/// Errors that can occur while saving or loading the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot exists but is not a valid address book
    #[error("corrupted address book {}: {source}", path.display())]
    Corrupted {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors surfaced by the command dispatcher.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Nothing was entered
    #[error("Enter a command.")]
    Empty,

    /// The command word is not recognised
    #[error("Invalid command.")]
    Unknown(String),

    /// Wrong number of arguments
    #[error("Usage: {0}")]
    Usage(&'static str),

    /// The underlying book operation failed
    #[error(transparent)]
    Book(#[from] BookError),

    /// Autosave failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Book(BookError::Validation(err))
    }
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
