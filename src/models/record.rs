//! Contact record: one person in the address book.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A single contact: a name, an ordered list of phones and an optional birthday.
///
/// The collections are only reachable through the methods below, so every
/// stored phone and birthday has passed validation. Every mutating method
/// either succeeds fully or leaves the record untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> BookResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate `raw` and append it to the phone list.
    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        let phone = Phone::new(raw)?;
        debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `raw`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if the record has no such phone.
    pub fn delete_phone(&mut self, raw: &str) -> BookResult<Phone> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == raw)
            .ok_or_else(|| BookError::PhoneNotFound(raw.to_string()))?;
        debug!(contact = %self.name, phone = raw, "Deleting phone");
        Ok(self.phones.remove(index))
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// `new` is validated before anything is touched. A missing `old` phone
    /// is not an error: the record is left as is and `Ok(false)` is returned.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<bool> {
        let replacement = Phone::new(new)?;
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                debug!(contact = %self.name, old, new, "Editing phone");
                *slot = replacement;
                Ok(true)
            }
            None => {
                debug!(contact = %self.name, old, "Phone to edit not present");
                Ok(false)
            }
        }
    }

    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Validate `raw` as `DD.MM.YYYY` and set it, replacing any previous birthday.
    pub fn add_birthday(&mut self, raw: &str) -> BookResult<()> {
        let birthday = Birthday::new(raw)?;
        debug!(contact = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}
