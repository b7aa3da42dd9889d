//! Domain validation errors.

use std::fmt;

/// Errors that can occur while constructing a domain value object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not a 10-digit string.
    InvalidPhone(String),

    /// The provided birthday does not match `DD.MM.YYYY` or is not a real date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "contact name cannot be empty"),
            Self::InvalidPhone(_) => write!(f, "phone must be a 10-digit string"),
            Self::InvalidBirthday(_) => write!(f, "invalid date format, expected DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}
