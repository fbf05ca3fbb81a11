//! AddressBook model: the name-keyed directory of records.

use crate::domain::Birthday;
use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Saturday's index with Monday = 0.
const FIRST_WEEKEND_DAY: u32 = 5;

/// The directory of contacts, keyed by name.
///
/// Keys are the records' own names, used verbatim (case-sensitive). A
/// `BTreeMap` keeps iteration deterministic so `all` renders in a stable
/// order. The book owns its records exclusively and is persisted as one
/// whole snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

/// One entry of the upcoming-birthday schedule.
///
/// `birthday` keeps the stored date; `celebration_date` is the date the
/// birthday is actually observed, after rolling weekend dates forward to the
/// following Monday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayReminder {
    pub name: String,
    pub birthday: Birthday,
    pub celebration_date: NaiveDate,
}

impl fmt::Display for BirthdayReminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}. Birthday: {}. Congratulation date: {}.",
            self.name,
            self.birthday,
            self.celebration_date.format("%d.%m.%Y")
        )
    }
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keyed by its name.
    ///
    /// This is an upsert: adding a second record with the same name silently
    /// replaces the first. Callers that want to extend an existing contact
    /// should [`find_mut`](Self::find_mut) and mutate in place.
    pub fn add(&mut self, record: Record) {
        self.records.insert(record.name().as_str().to_string(), record);
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record with the given name.
    ///
    /// Returns `None` when the name is absent; callers surface that as a
    /// lookup failure rather than treating it as fatal.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in key order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Compute the birthdays coming up within `window_days` of `today`,
    /// both ends inclusive.
    ///
    /// Each stored birthday is projected onto the current year; a projection
    /// that already passed is re-projected onto the next year, so a query on
    /// Dec 30 still sees a Jan 2 birthday. Feb 29 birthdays are observed on
    /// Mar 1 in non-leap years. Projections landing on a weekend are
    /// celebrated the following Monday.
    ///
    /// Results are sorted by ascending celebration date, ties broken by
    /// contact name.
    pub fn upcoming_birthdays(&self, window_days: i64, today: NaiveDate) -> Vec<BirthdayReminder> {
        let mut reminders: Vec<BirthdayReminder> = self
            .records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?;

                let mut candidate = project_onto_year(birthday.date(), today.year());
                if candidate < today {
                    candidate = project_onto_year(birthday.date(), today.year() + 1);
                }

                let delta = (candidate - today).num_days();
                if delta > window_days {
                    return None;
                }

                Some(BirthdayReminder {
                    name: record.name().as_str().to_string(),
                    birthday,
                    celebration_date: roll_off_weekend(candidate),
                })
            })
            .collect();

        reminders.sort_by(|a, b| {
            a.celebration_date
                .cmp(&b.celebration_date)
                .then_with(|| a.name.cmp(&b.name))
        });
        reminders
    }
}

/// Project a birthday's month/day onto `year`.
///
/// Feb 29 does not exist in non-leap years; those birthdays are observed on
/// Mar 1.
fn project_onto_year(date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(date)
}

/// Roll a weekend date forward to the following Monday.
fn roll_off_weekend(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_monday();
    if weekday >= FIRST_WEEKEND_DAY {
        date + Duration::days(i64::from(7 - weekday))
    } else {
        date
    }
}

// Serde support - the snapshot schema is a plain list of records, not a map,
// so the file format stays stable and hand-readable.
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.records.len()))?;
        for record in self.records.values() {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}

// Serde support - rebuild the map from the record list. Duplicate names in a
// hand-edited snapshot resolve like `add`: the last one wins.
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in records {
            book.add(record);
        }
        Ok(book)
    }
}
