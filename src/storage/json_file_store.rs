//! JSON snapshot persistence on the local filesystem.

use super::traits::BookStore;
use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default snapshot location, relative to the working directory.
pub const DEFAULT_BOOK_PATH: &str = "addressbook.json";

/// Serialize `book` to `path`, replacing whatever was there.
///
/// The snapshot is first written to a sibling `.tmp` file and then renamed
/// over `path`, so a failed write never truncates the previous snapshot.
pub fn save(book: &AddressBook, path: &Path) -> StorageResult<()> {
    let io_err = |source: std::io::Error| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    let bytes = serde_json::to_vec_pretty(book).map_err(|e| io_err(e.into()))?;
    let tmp = tmp_path(path);

    debug!(path = %tmp.display(), bytes = bytes.len(), "Writing snapshot");
    if let Err(e) = fs::write(&tmp, &bytes) {
        warn!(path = %tmp.display(), error = %e, "Failed to write snapshot");
        return Err(io_err(e));
    }
    if let Err(e) = fs::rename(&tmp, path) {
        warn!(path = %path.display(), error = %e, "Failed to replace snapshot");
        let _ = fs::remove_file(&tmp);
        return Err(io_err(e));
    }

    info!(path = %path.display(), contacts = book.len(), "Address book saved");
    Ok(())
}

/// Deserialize the book stored at `path`.
///
/// A missing file yields an empty book. A file that exists but does not
/// hold a valid address book is reported as `StorageError::Corrupted`.
pub fn load(path: &Path) -> StorageResult<AddressBook> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "No saved address book, starting empty");
            return Ok(AddressBook::new());
        }
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let book: AddressBook =
        serde_json::from_slice(&bytes).map_err(|source| StorageError::Corrupted {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), contacts = book.len(), "Address book loaded");
    Ok(book)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// `BookStore` backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_BOOK_PATH)
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> StorageResult<AddressBook> {
        load(&self.path)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        save(book, &self.path)
    }
}
