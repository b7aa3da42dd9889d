//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// `chrono` format string for the single accepted date pattern.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono alone would also accept "1.2.1990"; the pattern is fixed-width
static BIRTHDAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("valid birthday regex"));

/// A validated birthday.
///
/// The raw `DD.MM.YYYY` text is parsed once at construction; afterwards the
/// birthday is just a calendar date and renders back in the same pattern.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("24.08.1991").unwrap();
/// assert_eq!(birthday.to_string(), "24.08.1991");
/// assert!(Birthday::new("31.02.2020").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not match
    /// the pattern or names a day that does not exist (e.g. `31.02.2020`).
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();

        if !BIRTHDAY_PATTERN.is_match(raw) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }

        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    /// The calendar date of birth.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The date this birthday is observed in `year`.
    ///
    /// 29 February falls back to 28 February in non-leap years.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }

    /// First observed birthday on or after `from`.
    pub fn next_occurrence(&self, from: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.anniversary_in(from.year())?;
        if this_year >= from {
            Some(this_year)
        } else {
            self.anniversary_in(from.year() + 1)
        }
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
