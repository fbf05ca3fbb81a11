//! JSON file store for the address book snapshot.

use crate::error::StorageResult;
use crate::models::AddressBook;
use crate::storage::BookStore;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Whole-book persistence in a single pretty-printed JSON file.
///
/// The file holds a list of records (see [`AddressBook`]'s serde impls).
/// Saves go through a sibling temp file and a rename, so a crash mid-write
/// never leaves a truncated snapshot behind.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path. Nothing is touched
    /// until [`load`](BookStore::load) or [`save`](BookStore::save) runs.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl BookStore for JsonFileStore {
    /// Read the snapshot. A missing file is not an error: a fresh run starts
    /// with an empty book. An unreadable or corrupt file is surfaced, since
    /// silently dropping an existing book would lose data.
    fn load(&self) -> StorageResult<AddressBook> {
        if !self.path.exists() {
            info!("No snapshot at {}, starting with an empty book", self.path.display());
            return Ok(AddressBook::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let book: AddressBook = serde_json::from_str(&content)?;
        debug!("Loaded {} contact(s) from {}", book.len(), self.path.display());
        Ok(book)
    }

    /// Write the whole book as one atomic snapshot.
    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(book)?;
        let temp = self.temp_path();
        fs::write(&temp, content)?;
        fs::rename(&temp, &self.path)?;
        debug!("Saved {} contact(s) to {}", book.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    #[test]
    fn test_load_missing_file_yields_empty_book() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("addressbook.json"));

        let book = store.load().unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("addressbook.json"));

        let mut book = AddressBook::new();
        let mut bob = Record::new("Bob").unwrap();
        bob.add_phone("0123456789").unwrap();
        bob.set_birthday("22.05.2000").unwrap();
        book.add(bob);

        store.save(&book).unwrap();
        let restored = store.load().unwrap();
        assert_eq!(restored, book);
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("addressbook.json"));

        store.save(&AddressBook::new()).unwrap();
        assert!(store.path().exists());
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_load_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("addressbook.json");
        fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::new(path);
        assert!(store.load().is_err());
    }

    #[test]
    fn test_save_creates_missing_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/addressbook.json"));

        store.save(&AddressBook::new()).unwrap();
        assert!(store.path().exists());
    }
}
