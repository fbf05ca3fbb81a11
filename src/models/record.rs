//! Record model representing one contact in the directory.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: an immutable name, an ordered list of phone numbers, and an
/// optional birthday.
///
/// Phones have list semantics: insertion order is preserved and duplicates
/// are not collapsed. The birthday is a single overwritable slot.
///
/// Serializes as `{"name": ..., "phones": [...], "birthday": ...?}`, which is
/// also the element shape of the on-disk snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record holding only a name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phone numbers, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validate `phone` and append it to the phone list.
    ///
    /// # Errors
    ///
    /// Propagates `ValidationError::InvalidPhoneFormat`; the record is left
    /// unchanged on failure.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `value`. Removing a number that isn't
    /// present is a no-op, not an error.
    pub fn remove_phone(&mut self, value: &str) {
        self.phones.retain(|phone| phone.as_str() != value);
    }

    /// Replace every phone equal to `old` with a freshly validated `new`,
    /// returning how many entries were replaced.
    ///
    /// `new` is validated before anything is touched, so an invalid
    /// replacement never mutates the record. A return of `0` means `old`
    /// was not present; callers decide whether that is an error.
    ///
    /// # Errors
    ///
    /// Propagates `ValidationError::InvalidPhoneFormat` for `new`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<usize, ValidationError> {
        let replacement = Phone::new(new)?;
        let mut replaced = 0;
        for phone in &mut self.phones {
            if phone.as_str() == old {
                *phone = replacement.clone();
                replaced += 1;
            }
        }
        Ok(replaced)
    }

    /// Find the first phone whose value equals `value`.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == value)
    }

    /// Validate `birthday` and overwrite the birthday slot.
    ///
    /// # Errors
    ///
    /// Propagates `ValidationError::InvalidDateFormat` and
    /// `ValidationError::FutureDateNotAllowed`.
    pub fn set_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Phone values joined with `separator`.
    pub fn phones_joined(&self, separator: &str) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

// One deterministic human-readable line per contact.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}. Phones: {}. Birthday: {}.",
            self.name,
            self.phones_joined("; "),
            match &self.birthday {
                Some(birthday) => birthday.to_string(),
                None => "not set".to_string(),
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = Record::new("Bob").unwrap();
        assert_eq!(record.name().as_str(), "Bob");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_record_empty_name_fails() {
        assert!(Record::new("").is_err());
    }

    #[test]
    fn test_add_phone_preserves_order_and_duplicates() {
        let mut record = Record::new("Bob").unwrap();
        record.add_phone("0123456789").unwrap();
        record.add_phone("0987654321").unwrap();
        record.add_phone("0123456789").unwrap();

        let values: Vec<_> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(values, ["0123456789", "0987654321", "0123456789"]);
    }

    #[test]
    fn test_add_phone_invalid_leaves_record_unchanged() {
        let mut record = Record::new("Bob").unwrap();
        assert!(record.add_phone("123").is_err());
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_remove_phone_removes_all_matches() {
        let mut record = Record::new("Bob").unwrap();
        record.add_phone("0123456789").unwrap();
        record.add_phone("0987654321").unwrap();
        record.add_phone("0123456789").unwrap();

        record.remove_phone("0123456789");
        let values: Vec<_> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(values, ["0987654321"]);

        // Removing again is a no-op
        record.remove_phone("0123456789");
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_replaces_every_match() {
        let mut record = Record::new("Bob").unwrap();
        record.add_phone("0123456789").unwrap();
        record.add_phone("0123456789").unwrap();

        let replaced = record.edit_phone("0123456789", "0987654321").unwrap();
        assert_eq!(replaced, 2);
        assert!(record.find_phone("0987654321").is_some());
        assert!(record.find_phone("0123456789").is_none());
    }

    #[test]
    fn test_edit_phone_zero_matches_reports_count() {
        let mut record = Record::new("Bob").unwrap();
        record.add_phone("0123456789").unwrap();

        let replaced = record.edit_phone("1111111111", "0987654321").unwrap();
        assert_eq!(replaced, 0);
        assert!(record.find_phone("0123456789").is_some());
    }

    #[test]
    fn test_edit_phone_invalid_new_does_not_mutate() {
        let mut record = Record::new("Bob").unwrap();
        record.add_phone("0123456789").unwrap();

        assert!(record.edit_phone("0123456789", "bad").is_err());
        assert!(record.find_phone("0123456789").is_some());
    }

    #[test]
    fn test_find_phone_first_exact_match() {
        let mut record = Record::new("Bob").unwrap();
        record.add_phone("0123456789").unwrap();

        assert_eq!(
            record.find_phone("0123456789").map(Phone::as_str),
            Some("0123456789")
        );
        assert!(record.find_phone("9999999999").is_none());
    }

    #[test]
    fn test_set_birthday_overwrites() {
        let mut record = Record::new("Bob").unwrap();
        record.set_birthday("22.05.2000").unwrap();
        record.set_birthday("01.01.1999").unwrap();

        assert_eq!(record.birthday().unwrap().to_string(), "01.01.1999");
    }

    #[test]
    fn test_set_birthday_invalid_leaves_slot_unchanged() {
        let mut record = Record::new("Bob").unwrap();
        record.set_birthday("22.05.2000").unwrap();
        assert!(record.set_birthday("31.04.2000").is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "22.05.2000");
    }

    #[test]
    fn test_record_display() {
        let mut record = Record::new("Bob").unwrap();
        record.add_phone("0123456789").unwrap();
        record.add_phone("0987654321").unwrap();
        record.set_birthday("22.05.2000").unwrap();

        assert_eq!(
            record.to_string(),
            "Contact name: Bob. Phones: 0123456789; 0987654321. Birthday: 22.05.2000."
        );
    }

    #[test]
    fn test_record_display_without_birthday() {
        let record = Record::new("Bob").unwrap();
        assert_eq!(record.to_string(), "Contact name: Bob. Phones: . Birthday: not set.");
    }

    #[test]
    fn test_record_serialization_shape() {
        let mut record = Record::new("Bob").unwrap();
        record.add_phone("0123456789").unwrap();
        record.set_birthday("22.05.2000").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Bob","phones":["0123456789"],"birthday":"22.05.2000"}"#
        );
    }

    #[test]
    fn test_record_deserialization_defaults() {
        let record: Record = serde_json::from_str(r#"{"name":"Bob"}"#).unwrap();
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_record_deserialization_rejects_invalid_phone() {
        let result: Result<Record, _> =
            serde_json::from_str(r#"{"name":"Bob","phones":["123"]}"#);
        assert!(result.is_err());
    }
}
