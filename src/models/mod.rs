//! Data models: contact records and the address book that owns them.

pub mod book;
pub mod record;

pub use book::{AddressBook, BirthdayReminder};
pub use record::Record;
