//! Parsing of a raw input line into a `Command`.

use crate::error::CommandError;
use std::str::FromStr;

const USAGE_ADD: &str = "add <name> <phone>";
const USAGE_CHANGE: &str = "change <name> <old phone> <new phone>";
const USAGE_PHONE: &str = "phone <name>";
const USAGE_DELETE: &str = "delete <name>";
const USAGE_ADD_BIRTHDAY: &str = "add-birthday <name> <DD.MM.YYYY>";
const USAGE_SHOW_BIRTHDAY: &str = "show-birthday <name>";

/// A parsed user command.
///
/// Arguments are whitespace separated, so names are single words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, old: String, new: String },
    Phone { name: String },
    Delete { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    Exit,
}

impl Command {
    /// Whether running the command can change the address book.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Add { .. }
                | Command::Change { .. }
                | Command::Delete { .. }
                | Command::AddBirthday { .. }
        )
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let word = parts.next().ok_or(CommandError::Empty)?.to_lowercase();
        let args: Vec<String> = parts.map(str::to_string).collect();

        let command = match word.as_str() {
            "hello" => {
                expect_args::<0>(args, "hello")?;
                Command::Hello
            }
            "add" => {
                let [name, phone] = expect_args(args, USAGE_ADD)?;
                Command::Add { name, phone }
            }
            "change" => {
                let [name, old, new] = expect_args(args, USAGE_CHANGE)?;
                Command::Change { name, old, new }
            }
            "phone" => {
                let [name] = expect_args(args, USAGE_PHONE)?;
                Command::Phone { name }
            }
            "delete" => {
                let [name] = expect_args(args, USAGE_DELETE)?;
                Command::Delete { name }
            }
            "all" => {
                expect_args::<0>(args, "all")?;
                Command::All
            }
            "add-birthday" => {
                let [name, birthday] = expect_args(args, USAGE_ADD_BIRTHDAY)?;
                Command::AddBirthday { name, birthday }
            }
            "show-birthday" => {
                let [name] = expect_args(args, USAGE_SHOW_BIRTHDAY)?;
                Command::ShowBirthday { name }
            }
            "birthdays" => {
                expect_args::<0>(args, "birthdays")?;
                Command::Birthdays
            }
            "close" | "exit" => Command::Exit,
            _ => return Err(CommandError::Unknown(word)),
        };

        Ok(command)
    }
}

fn expect_args<const N: usize>(
    args: Vec<String>,
    usage: &'static str,
) -> Result<[String; N], CommandError> {
    <[String; N]>::try_from(args).map_err(|_| CommandError::Usage(usage))
}
