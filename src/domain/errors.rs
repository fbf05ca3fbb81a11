//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly 10 ASCII digits.
    InvalidPhoneFormat(String),

    /// The provided birthday does not match DD.MM.YYYY or is not a real date.
    InvalidDateFormat(String),

    /// The provided birthday lies in the future.
    FutureDateNotAllowed(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhoneFormat(phone) => {
                write!(f, "Invalid phone number (expected 10 digits): {}", phone)
            }
            Self::InvalidDateFormat(date) => {
                write!(f, "Invalid date (expected DD.MM.YYYY): {}", date)
            }
            Self::FutureDateNotAllowed(date) => {
                write!(f, "Date cannot be in the future: {}", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
