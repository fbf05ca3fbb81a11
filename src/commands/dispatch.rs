//! Command dispatch and the uniform error-recovery boundary.
//!
//! This is the single place where handler errors become user-facing text.
//! Handlers raise precise [`CommandError`] kinds; the boundary collapses
//! them into four fixed reply templates and never leaks the raw error, which
//! is logged at debug level instead.

use crate::commands::handlers;
use crate::commands::parse::parse_line;
use crate::error::{CommandError, CommandResult};
use crate::models::AddressBook;
use chrono::{Local, NaiveDate};
use tracing::debug;

/// Appended to every recovery reply.
const HELP_HINT: &str = "For more details enter 'help'.";

/// What the read loop should do after a line has been processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this reply and read the next line.
    Reply(String),
    /// Persist the book and terminate.
    Exit,
}

/// Process one raw input line against the book.
///
/// `window_days` is the upcoming-birthday window used by the `birthdays`
/// command; "today" is taken from the system clock.
pub fn dispatch(line: &str, book: &mut AddressBook, window_days: u64) -> Outcome {
    dispatch_with_today(line, book, window_days, Local::now().date_naive())
}

/// [`dispatch`] with an explicit `today`, so the birthday schedule is
/// testable against a fixed clock.
pub fn dispatch_with_today(
    line: &str,
    book: &mut AddressBook,
    window_days: u64,
    today: NaiveDate,
) -> Outcome {
    let Some((command, args)) = parse_line(line) else {
        return Outcome::Reply(format!("No command given.\n{}", HELP_HINT));
    };

    let result: CommandResult<String> = match command.as_str() {
        "exit" | "close" => return Outcome::Exit,
        "hello" | "hi" => Ok(handlers::greeting()),
        "add" => handlers::add_contact(&args, book),
        "change" => handlers::change_contact(&args, book),
        "phone" => handlers::show_phones(&args, book),
        "all" => Ok(handlers::list_all(book)),
        "add-birthday" => handlers::add_birthday(&args, book),
        "show-birthday" => handlers::show_birthday(&args, book),
        "birthdays" => Ok(handlers::upcoming_birthdays(book, window_days, today)),
        "help" => Ok(handlers::instructions()),
        other => {
            debug!("Unrecognized command: {:?}", other);
            return Outcome::Reply(invalid_command_reply());
        }
    };

    Outcome::Reply(match result {
        Ok(reply) => reply,
        Err(error) => {
            debug!("Command '{}' failed: {}", command, error);
            recovery_reply(&error)
        }
    })
}

/// The four fixed recovery templates, keyed by error category. Validation
/// failures share the missing-arguments template: both mean the user typed
/// the command body wrong.
fn recovery_reply(error: &CommandError) -> String {
    match error {
        CommandError::MissingArguments { .. } | CommandError::Validation(_) => format!(
            "Make sure you provided all needed arguments after a command. E.g. in \
             'add username phone' a command should look like this: 'add Bob 0123456789'.\n{}",
            HELP_HINT
        ),
        CommandError::BadTemplate { command } => format!(
            "Make sure you follow the '{} username' template to display a contact's info.\n\
             For example, '{} Bob'.\n{}",
            command, command, HELP_HINT
        ),
        CommandError::NotFound(subject) => format!(
            "{} was not found. Use 'all' to list saved contacts.\n{}",
            subject, HELP_HINT
        ),
    }
}

fn invalid_command_reply() -> String {
    format!("Seems like you've provided an invalid command.\n{}", HELP_HINT)
}
