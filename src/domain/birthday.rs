//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The wire/display format for birthdays.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// Strict shape check: two-digit day, two-digit month, four-digit year.
/// chrono alone would also accept one-digit days and months.
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("valid date pattern"));

/// A type-safe wrapper for birthdays.
///
/// A birthday is entered and rendered as `DD.MM.YYYY`, must name a real
/// calendar date, and cannot lie in the future.
///
/// # Example
///
/// ```
/// use rolo::domain::Birthday;
///
/// let birthday = Birthday::new("22.05.2000").unwrap();
/// assert_eq!(birthday.to_string(), "22.05.2000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday from a `DD.MM.YYYY` string, validating against
    /// the current date.
    ///
    /// # Errors
    ///
    /// - `ValidationError::InvalidDateFormat` if the pattern or calendar
    ///   validity does not hold (e.g. `31.04.2000`).
    /// - `ValidationError::FutureDateNotAllowed` if the date is strictly
    ///   after today.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        Self::parse(value.as_ref(), Local::now().date_naive())
    }

    /// Create a new Birthday, validating against an explicit `today`.
    ///
    /// Pure variant of [`Birthday::new`]; the clock is the only thing
    /// injected.
    pub fn parse(value: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        if !DATE_PATTERN.is_match(value) {
            return Err(ValidationError::InvalidDateFormat(value.to_string()));
        }

        let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDateFormat(value.to_string()))?;

        if date > today {
            return Err(ValidationError::FutureDateNotAllowed(value.to_string()));
        }

        Ok(Self(date))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

// Serde support - serialize as a DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with full validation. A date that
// was not in the future when it was saved still isn't, so re-validating on
// load can only reject hand-edited snapshots.
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
