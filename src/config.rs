//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use crate::models::UPCOMING_BIRTHDAY_DAYS;
use crate::storage::DEFAULT_BOOK_PATH;
use std::env;
use std::path::PathBuf;

/// Largest accepted birthday window, one (leap) year.
const MAX_WINDOW_DAYS: u64 = 366;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book snapshot is stored (default: "addressbook.json")
    pub book_path: PathBuf,

    /// Save after every mutating command (default: true)
    pub autosave: bool,

    /// Days covered by the `birthdays` command (default: 7)
    pub birthday_window_days: u64,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PATH`: Snapshot location (default: addressbook.json)
    /// - `CONTACT_BOOK_AUTOSAVE`: Save after each change, true/false (default: true)
    /// - `BIRTHDAY_WINDOW_DAYS`: Upcoming birthday window, 1-366 (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let book_path = match env::var("CONTACT_BOOK_PATH") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                })
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => defaults.book_path,
        };

        let autosave = Self::parse_env_bool("CONTACT_BOOK_AUTOSAVE", defaults.autosave)?;
        let birthday_window_days =
            Self::parse_env_u64("BIRTHDAY_WINDOW_DAYS", defaults.birthday_window_days)?;

        if birthday_window_days == 0 || birthday_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 1 and {}", MAX_WINDOW_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            book_path,
            autosave,
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean flag with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            autosave: true,
            birthday_window_days: UPCOMING_BIRTHDAY_DAYS,
            log_level: "warn".to_string(),
        }
    }
}
