//! Configuration management for the rolo contact assistant.
//!
//! This module handles loading configuration from environment variables.
//! All settings have defaults, so a bare `rolo` invocation works out of the
//! box with a snapshot file in the current directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the address-book snapshot file
    pub book_path: PathBuf,

    /// Upcoming-birthday window in days for the `birthdays` command
    /// (default: 7)
    pub birthday_window_days: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

/// Default snapshot location, relative to the working directory.
const DEFAULT_BOOK_PATH: &str = "addressbook.json";

/// Default upcoming-birthday window.
const DEFAULT_WINDOW_DAYS: u64 = 7;

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ROLO_BOOK_PATH`: snapshot file path (default: `addressbook.json`)
    /// - `ROLO_BIRTHDAY_WINDOW_DAYS`: birthday window in days (default: 7)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load a .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let book_path = match env::var("ROLO_BOOK_PATH") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ROLO_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => PathBuf::from(DEFAULT_BOOK_PATH),
        };

        let birthday_window_days =
            Self::parse_env_u64("ROLO_BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_path,
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            log_level: "error".to_string(),
        }
    }
}
