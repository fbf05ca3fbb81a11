//! rolo - an interactive personal contact directory with birthday reminders.
//!
//! The assistant keeps a name-keyed book of contacts, each with validated
//! 10-digit phone numbers and an optional birthday, and answers a fixed
//! vocabulary of commands over a line-oriented prompt loop. Birthdays
//! falling within the configured window are reported with weekend dates
//! rolled forward to the following Monday. The whole book is persisted as a
//! single JSON snapshot, loaded on start and saved on exit.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (name, phone, birthday)
//! - **models**: contact records and the address book, including the
//!   upcoming-birthday schedule
//! - **commands**: line parsing, command handlers, and the dispatch boundary
//!   that turns errors into fixed user-facing replies
//! - **storage**: whole-book JSON snapshot persistence
//! - **config**: configuration from environment variables
//! - **error**: custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;

pub use commands::{dispatch, dispatch_with_today, Outcome};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, StorageError};
pub use models::{AddressBook, BirthdayReminder, Record};
pub use storage::{BookStore, JsonFileStore};
