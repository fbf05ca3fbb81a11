//! Error types for the rolo contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error
//! handling. Domain value objects raise [`ValidationError`]s; everything the
//! command layer can fail with is funneled into [`CommandError`], which the
//! dispatch boundary translates into fixed user-facing replies.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by command handlers.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A multi-argument command was invoked with too few arguments
    #[error("Missing arguments for '{command}'")]
    MissingArguments { command: &'static str },

    /// A single-argument display command was invoked without its argument
    #[error("Command '{command}' requires a contact name")]
    BadTemplate { command: &'static str },

    /// A contact or phone lookup failed
    #[error("{0} was not found")]
    NotFound(String),

    /// A field value failed domain validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur while loading or saving the address book snapshot.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem access failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be encoded or decoded
    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
