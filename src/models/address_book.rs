//! Address book: the name-keyed collection of contact records.

use super::record::Record;
use crate::error::{BookError, BookResult};
use chrono::{Days, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Default size of the upcoming-birthday window, in days.
pub const UPCOMING_BIRTHDAY_DAYS: u64 = 7;

/// All contacts, keyed by name, in insertion order.
///
/// The key of every entry is always the name of the record stored under it,
/// so at most one record exists per name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// File `record` under its name, replacing any record already there.
    ///
    /// Returns the replaced record, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        debug!(contact = %key, "Adding record");
        // Replacing keeps the original insertion slot
        self.records.insert(key, record)
    }

    /// Remove and return the record filed under `name`.
    pub fn delete_record(&mut self, name: &str) -> BookResult<Record> {
        debug!(contact = name, "Deleting record");
        self.records
            .shift_remove(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    pub fn find_record(&self, name: &str) -> BookResult<&Record> {
        self.records
            .get(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    pub fn find_record_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Names of contacts whose birthday falls in `[today, today + 7 days)`.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<&str> {
        self.upcoming_birthdays_within(today, UPCOMING_BIRTHDAY_DAYS)
    }

    /// Names of contacts whose next birthday falls in `[today, today + days)`.
    ///
    /// A birthday that already passed this year is looked up in the next one,
    /// so late-December windows pick up early-January birthdays.
    pub fn upcoming_birthdays_within(&self, today: NaiveDate, days: u64) -> Vec<&str> {
        let Some(window_end) = today.checked_add_days(Days::new(days)) else {
            return Vec::new();
        };

        self.records
            .values()
            .filter(|record| {
                record
                    .birthday()
                    .and_then(|birthday| birthday.next_occurrence(today))
                    .is_some_and(|next| next < window_end)
            })
            .map(|record| record.name().as_str())
            .collect()
    }
}

// Rejects snapshots whose map key disagrees with the record's own name
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = IndexMap::<String, Record>::deserialize(deserializer)?;
        if let Some((key, record)) = records
            .iter()
            .find(|(key, record)| key.as_str() != record.name().as_str())
        {
            return Err(serde::de::Error::custom(format!(
                "record filed under '{}' is named '{}'",
                key,
                record.name()
            )));
        }
        Ok(Self { records })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(name: &str, birthday: Option<&str>) -> Record {
        let mut record = Record::new(name).unwrap();
        if let Some(birthday) = birthday {
            record.add_birthday(birthday).unwrap();
        }
        record
    }

    #[test]
    fn test_add_and_find_record() {
        let mut book = AddressBook::new();
        let mut alice = Record::new("Alice").unwrap();
        alice.add_phone("1234567890").unwrap();

        assert!(book.add_record(alice.clone()).is_none());
        assert_eq!(book.find_record("Alice"), Ok(&alice));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_find_missing_record() {
        let book = AddressBook::new();
        assert_eq!(
            book.find_record("Bob"),
            Err(BookError::ContactNotFound("Bob".to_string()))
        );
    }

    #[test]
    fn test_add_record_replaces_same_name() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Alice").unwrap());
        book.add_record(Record::new("Bob").unwrap());

        let mut replacement = Record::new("Alice").unwrap();
        replacement.add_phone("5555555555").unwrap();
        let previous = book.add_record(replacement.clone());

        assert!(previous.unwrap().phones().is_empty());
        assert_eq!(book.len(), 2);
        assert_eq!(book.find_record("Alice"), Ok(&replacement));

        let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_delete_record() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Alice").unwrap());

        let removed = book.delete_record("Alice").unwrap();
        assert_eq!(removed.name().as_str(), "Alice");
        assert!(book.is_empty());

        assert_eq!(
            book.delete_record("Alice"),
            Err(BookError::ContactNotFound("Alice".to_string()))
        );
    }

    #[test]
    fn test_delete_preserves_order_of_rest() {
        let mut book = AddressBook::new();
        for name in ["A", "B", "C"] {
            book.add_record(Record::new(name).unwrap());
        }
        book.delete_record("A").unwrap();
        let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["B", "C"]);
    }

    #[test]
    fn test_find_record_mut_mutates_in_place() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Alice").unwrap());

        book.find_record_mut("Alice")
            .unwrap()
            .add_phone("1234567890")
            .unwrap();

        assert_eq!(book.find_record("Alice").unwrap().phones().len(), 1);
        assert!(book.find_record_mut("Bob").is_err());
    }

    #[test]
    fn test_upcoming_birthdays_window() {
        let mut book = AddressBook::new();
        book.add_record(record("A", Some("03.06.1990")));
        book.add_record(record("B", Some("10.06.1985")));
        book.add_record(record("C", None));

        assert_eq!(book.get_upcoming_birthdays(date(2024, 6, 1)), vec!["A"]);
    }

    #[test]
    fn test_upcoming_birthdays_window_is_half_open() {
        let mut book = AddressBook::new();
        book.add_record(record("Today", Some("01.06.2000")));
        book.add_record(record("LastDay", Some("07.06.2000")));
        book.add_record(record("TooLate", Some("08.06.2000")));
        book.add_record(record("Yesterday", Some("31.05.2000")));

        assert_eq!(
            book.get_upcoming_birthdays(date(2024, 6, 1)),
            vec!["Today", "LastDay"]
        );
    }

    #[test]
    fn test_upcoming_birthdays_year_boundary() {
        let mut book = AddressBook::new();
        book.add_record(record("D", Some("02.01.1970")));
        book.add_record(record("E", Some("05.01.1970")));

        assert_eq!(book.get_upcoming_birthdays(date(2024, 12, 29)), vec!["D"]);
    }

    #[test]
    fn test_upcoming_birthdays_custom_window() {
        let mut book = AddressBook::new();
        book.add_record(record("A", Some("03.06.1990")));
        book.add_record(record("B", Some("10.06.1985")));

        assert_eq!(
            book.upcoming_birthdays_within(date(2024, 6, 1), 14),
            vec!["A", "B"]
        );
        assert!(book.upcoming_birthdays_within(date(2024, 6, 1), 0).is_empty());
    }

    #[test]
    fn test_upcoming_leap_day_birthday_in_common_year() {
        let mut book = AddressBook::new();
        book.add_record(record("Leap", Some("29.02.2000")));

        assert_eq!(book.get_upcoming_birthdays(date(2023, 2, 25)), vec!["Leap"]);
        assert!(book.get_upcoming_birthdays(date(2023, 3, 1)).is_empty());
    }

    #[test]
    fn test_deserialize_rejects_mismatched_key() {
        let json = r#"{"Alice":{"name":"Bob","phones":[],"birthday":null}}"#;
        let result: Result<AddressBook, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
