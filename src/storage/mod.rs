//! Persistence of the address book between runs.

mod json_file_store;
mod traits;

pub use json_file_store::{load, save, JsonFileStore, DEFAULT_BOOK_PATH};
pub use traits::BookStore;
