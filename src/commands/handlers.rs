//! Command handlers.
//!
//! One function per command word. Handlers return the rendered reply on
//! success and a [`CommandError`] otherwise; the dispatch boundary owns the
//! translation of errors into user-facing text, so nothing here formats
//! failure messages.

use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;

/// `add <name> <phone>` — upsert a contact and attach a phone.
///
/// An existing contact is extended in place; a new one is created. The
/// phone is validated before any record is inserted, so a bad number never
/// leaves an empty contact behind.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone, ..] = args else {
        return Err(CommandError::MissingArguments { command: "add" });
    };

    match book.find_mut(name) {
        Some(record) => {
            record.add_phone(phone)?;
            Ok("The contact has been updated successfully.".to_string())
        }
        None => {
            let mut record = Record::new(name.as_str())?;
            record.add_phone(phone)?;
            book.add(record);
            Ok("The contact has been added successfully.".to_string())
        }
    }
}

/// `change <name> <old_phone> <new_phone>` — replace a phone on an existing
/// contact.
///
/// Replacing a number the contact does not have is reported as a lookup
/// failure rather than silently succeeding.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old_phone, new_phone, ..] = args else {
        return Err(CommandError::MissingArguments { command: "change" });
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.clone()))?;

    let replaced = record.edit_phone(old_phone, new_phone)?;
    if replaced == 0 {
        return Err(CommandError::NotFound(format!(
            "Phone {} for {}",
            old_phone, name
        )));
    }
    Ok("The contact's phone has been changed successfully.".to_string())
}

/// `phone <name>` — render a contact's phone numbers.
pub fn show_phones(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::BadTemplate { command: "phone" });
    };

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::NotFound(name.clone()))?;

    Ok(format!("Name: {}. Phones: {}", name, record.phones_joined(", ")))
}

/// `all` — render every contact, one line each, in name order.
pub fn list_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts saved yet.".to_string();
    }
    book.records()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>` — set a contact's birthday.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, date, ..] = args else {
        return Err(CommandError::MissingArguments { command: "add-birthday" });
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.clone()))?;

    record.set_birthday(date)?;
    Ok("The birthday has been added successfully.".to_string())
}

/// `show-birthday <name>` — render a contact's birthday.
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::BadTemplate { command: "show-birthday" });
    };

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::NotFound(name.clone()))?;

    let birthday = match record.birthday() {
        Some(birthday) => birthday.to_string(),
        None => "not set".to_string(),
    };
    Ok(format!("Name: {}. Birthday: {}", name, birthday))
}

/// `birthdays` — render the upcoming-birthday schedule.
pub fn upcoming_birthdays(book: &AddressBook, window_days: u64, today: NaiveDate) -> String {
    let reminders = book.upcoming_birthdays(window_days as i64, today);
    if reminders.is_empty() {
        return format!(
            "No upcoming birthdays in the following {} days.",
            window_days
        );
    }
    reminders
        .iter()
        .map(|reminder| reminder.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `hello` — greeting.
pub fn greeting() -> String {
    "How can I help you?".to_string()
}

/// `help` — the command reference.
pub fn instructions() -> String {
    [
        "Please use the instruction below:",
        "",
        "'add <username> <phone>' to add a new contact. A phone number should be 10 digits long. E.g. 'add Bob 0123456789'",
        "'change <username> <old_phone> <new_phone>' to replace a phone on an existing contact. E.g. 'change Bob 0123456789 0987654321'",
        "'phone <username>' to display a contact's phones. E.g. 'phone Bob'",
        "'all' to display all contacts",
        "'add-birthday <username> <DD.MM.YYYY>' to set a contact's birthday. E.g. 'add-birthday Bob 22.05.2000'",
        "'show-birthday <username>' to see a contact's birthday. E.g. 'show-birthday Bob'",
        "'birthdays' to display all upcoming birthdays in the following 7 days",
        "'hello' to greet the assistant",
        "'help' to see this instruction",
        "'close' or 'exit' to stop the assistant",
    ]
    .join("\n")
}
