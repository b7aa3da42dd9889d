use crate::error::StorageResult;
use crate::models::AddressBook;

/// Storage for the address book snapshot.
///
/// Abstracts over where the book lives so the command dispatcher can be
/// driven against a file on disk or an in-memory mock.
pub trait BookStore {
    /// Load the stored book, or an empty one if nothing has been saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Overwrite the stored book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
