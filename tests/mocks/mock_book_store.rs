use contact_book::error::{StorageError, StorageResult};
use contact_book::models::AddressBook;
use contact_book::storage::BookStore;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock book store for testing.
///
/// Keeps the last saved snapshot in memory, can be told to fail saves,
/// and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBookStore {
    snapshot: Arc<Mutex<Option<AddressBook>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockBookStore {
    /// Create a new empty MockBookStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// The last successfully saved book.
    pub fn saved(&self) -> Option<AddressBook> {
        self.snapshot.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl BookStore for MockBookStore {
    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");
        Ok(self.saved().unwrap_or_default())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io {
                path: PathBuf::from("mock"),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            });
        }

        *self.snapshot.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
