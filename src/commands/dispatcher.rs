//! Executes parsed commands against the address book.

use super::parser::Command;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record, UPCOMING_BIRTHDAY_DAYS};
use crate::storage::BookStore;
use chrono::NaiveDate;
use tracing::{debug, error, info, warn};

/// What the dispatcher answers to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text to show the user
    pub message: String,
    /// The session should end after this reply
    pub exit: bool,
}

impl Reply {
    fn say(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit: false,
        }
    }

    fn goodbye() -> Self {
        Self {
            message: "Good bye!".to_string(),
            exit: true,
        }
    }
}

/// Owns the address book for one session and applies commands to it.
///
/// The book and its store are handed in by the caller; nothing here is
/// process-global, so a session can be driven entirely from tests.
pub struct CommandDispatcher<S: BookStore> {
    book: AddressBook,
    store: S,
    autosave: bool,
    birthday_window_days: u64,
}

impl<S: BookStore> CommandDispatcher<S> {
    /// Create a dispatcher with autosave on and the default 7-day window.
    pub fn new(book: AddressBook, store: S) -> Self {
        Self {
            book,
            store,
            autosave: true,
            birthday_window_days: UPCOMING_BIRTHDAY_DAYS,
        }
    }

    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    pub fn with_birthday_window(mut self, days: u64) -> Self {
        self.birthday_window_days = days;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parse and run one input line, turning any failure into a user message.
    pub fn handle_line(&mut self, line: &str, today: NaiveDate) -> Reply {
        let result = line
            .parse::<Command>()
            .and_then(|command| self.execute(command, today));

        match result {
            Ok(reply) => reply,
            Err(e) => {
                warn!(input = line, error = %e, "Command failed");
                Reply::say(capitalize(&e.to_string()))
            }
        }
    }

    /// Run `command`. A failed command leaves the book unchanged.
    pub fn execute(&mut self, command: Command, today: NaiveDate) -> CommandResult<Reply> {
        debug!(?command, "Executing command");
        let mut changed = command.is_mutating();
        let before = (changed && self.autosave).then(|| self.book.clone());

        let reply = match command {
            Command::Hello => Reply::say("How can I help you?"),
            Command::Add { name, phone } => self.add_contact(name, &phone)?,
            Command::Change { name, old, new } => {
                let record = self.book.find_record_mut(&name)?;
                if record.edit_phone(&old, &new)? {
                    Reply::say("Contact updated.")
                } else {
                    changed = false;
                    Reply::say("Phone number not found.")
                }
            }
            Command::Phone { name } => Reply::say(self.book.find_record(&name)?.to_string()),
            Command::Delete { name } => {
                self.book.delete_record(&name)?;
                Reply::say("Contact deleted.")
            }
            Command::All => {
                if self.book.is_empty() {
                    Reply::say("No contacts saved.")
                } else {
                    let lines: Vec<String> = self.book.iter().map(Record::to_string).collect();
                    Reply::say(lines.join("\n"))
                }
            }
            Command::AddBirthday { name, birthday } => {
                self.book.find_record_mut(&name)?.add_birthday(&birthday)?;
                Reply::say(format!("Birthday added for {}.", name))
            }
            Command::ShowBirthday { name } => match self.book.find_record(&name)?.birthday() {
                Some(birthday) => Reply::say(format!("{}'s birthday: {}", name, birthday)),
                None => Reply::say(format!("No birthday found for {}.", name)),
            },
            Command::Birthdays => {
                let names = self
                    .book
                    .upcoming_birthdays_within(today, self.birthday_window_days);
                if names.is_empty() {
                    Reply::say("No upcoming birthdays.")
                } else {
                    Reply::say(format!("Upcoming birthdays: {}", names.join(", ")))
                }
            }
            Command::Exit => {
                self.save()?;
                return Ok(Reply::goodbye());
            }
        };

        if changed && self.autosave {
            if let Err(e) = self.save() {
                // Unsaved changes are rolled back so a retry does not apply them twice
                if let Some(before) = before {
                    self.book = before;
                }
                return Err(e);
            }
        }

        Ok(reply)
    }

    /// Persist the book through the store.
    pub fn save(&self) -> CommandResult<()> {
        self.store.save(&self.book).map_err(|e| {
            error!(error = %e, "Failed to save address book");
            CommandError::from(e)
        })
    }

    fn add_contact(&mut self, name: String, phone: &str) -> CommandResult<Reply> {
        if let Ok(record) = self.book.find_record_mut(&name) {
            record.add_phone(phone)?;
            return Ok(Reply::say("Contact updated."));
        }

        // Build the record fully before filing it so a bad phone adds nothing
        let mut record = Record::new(name)?;
        record.add_phone(phone)?;
        info!(contact = %record.name(), "New contact");
        self.book.add_record(record);
        Ok(Reply::say("Contact added."))
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
