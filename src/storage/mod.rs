//! Persistence gateway for the address book.
//!
//! The book is always loaded and saved as a single whole; there is no
//! incremental persistence. The trait exists so tests can substitute an
//! in-memory double for the file-backed store.

pub mod json_store;

pub use json_store::JsonFileStore;

use crate::error::StorageResult;
use crate::models::AddressBook;

/// Whole-book load/save gateway.
pub trait BookStore {
    /// Restore the book, or produce an empty one when nothing was persisted
    /// yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Persist the book as one snapshot.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
