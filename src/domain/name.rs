//! Name value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for contact names.
///
/// The name is an opaque, case-sensitive label and doubles as the unique
/// key inside an [`AddressBook`](crate::models::AddressBook). The only
/// constraint is that it cannot be empty.
///
/// # Example
///
/// ```
/// use rolo::domain::Name;
///
/// let name = Name::new("Bob").unwrap();
/// assert_eq!(name.as_str(), "Bob");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name, validating that it's not empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the provided name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = Name::new("Bob").unwrap();
        assert_eq!(name.as_str(), "Bob");
    }

    #[test]
    fn test_name_empty_fails() {
        assert_eq!(Name::new(""), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_name_is_case_sensitive() {
        let lower = Name::new("bob").unwrap();
        let upper = Name::new("Bob").unwrap();
        assert_ne!(lower, upper);
    }

    #[test]
    fn test_name_display() {
        let name = Name::new("Alice").unwrap();
        assert_eq!(format!("{}", name), "Alice");
    }

    #[test]
    fn test_name_serialization() {
        let name = Name::new("Alice").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Alice\"");
    }

    #[test]
    fn test_name_deserialization_empty_fails() {
        let result: Result<Name, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
