//! Contact data model.
//!
//! A `Record` is one person; an `AddressBook` owns every record, keyed by name.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UPCOMING_BIRTHDAY_DAYS};
pub use record::Record;
