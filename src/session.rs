//! Session: owns one table and one view, dispatches text commands, and
//! notifies the view after each successful mutation.

use crate::chained_hash_set::{AddError, ChainedHashSet};
use crate::view::{ChangeEvent, TableView};
use log::debug;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Add(String),
    Remove(String),
    Contains(String),
    Size,
    Display,
}

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("Invalid input")]
    InvalidInput,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

impl Command {
    /// Build a command from a verb and its raw input. The input is trimmed;
    /// keyed commands reject an empty key.
    pub fn parse(verb: &str, input: &str) -> Result<Self, CommandError> {
        let key = input.trim();
        let keyed = |make: fn(String) -> Command| {
            if key.is_empty() {
                Err(CommandError::InvalidInput)
            } else {
                Ok(make(key.to_string()))
            }
        };
        match verb.trim().to_ascii_lowercase().as_str() {
            "add" => keyed(Command::Add),
            "remove" => keyed(Command::Remove),
            "contains" => keyed(Command::Contains),
            "size" => Ok(Command::Size),
            "display" => Ok(Command::Display),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }

    /// Parse a whole line of the form `<verb> [key]`.
    pub fn parse_line(line: &str) -> Result<Self, CommandError> {
        let line = line.trim_start();
        match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => Self::parse(verb, rest),
            None => Self::parse(line, ""),
        }
    }
}

/// Outcome of a command: a success flag plus a human-readable message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Response {
    pub success: bool,
    pub message: String,
}

impl Response {
    fn ok(message: String) -> Self {
        Self {
            success: true,
            message,
        }
    }
    fn fail(message: String) -> Self {
        Self {
            success: false,
            message,
        }
    }
}

pub struct Session<V> {
    table: ChainedHashSet,
    view: V,
}

impl<V: TableView> Session<V> {
    pub fn new(table: ChainedHashSet, view: V) -> Self {
        Self { table, view }
    }

    pub fn table(&self) -> &ChainedHashSet {
        &self.table
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Tear the session apart, handing back the table and the view.
    pub fn into_parts(self) -> (ChainedHashSet, V) {
        (self.table, self.view)
    }

    pub fn execute(&mut self, cmd: Command) -> Response {
        debug!("execute {:?}", cmd);
        match cmd {
            Command::Add(key) => self.add(key),
            Command::Remove(key) => self.remove(&key),
            Command::Contains(key) => {
                if self.table.contains(&key) {
                    Response::ok(format!("Key '{}' found", key))
                } else {
                    Response::fail(format!("Key '{}' not found", key))
                }
            }
            Command::Size => Response::ok(format!("Current size: {}", self.table.len())),
            Command::Display => Response::ok(self.table.display()),
        }
    }

    /// Parse and run one input line; parse failures become failed responses.
    pub fn execute_line(&mut self, line: &str) -> Response {
        match Command::parse_line(line) {
            Ok(cmd) => self.execute(cmd),
            Err(e) => Response::fail(e.to_string()),
        }
    }

    fn add(&mut self, key: String) -> Response {
        // The key moves into the table; keep a copy for the event and message.
        match self.table.add(key.clone()) {
            Ok(placement) => {
                self.notify(ChangeEvent::Added {
                    key: &key,
                    placement,
                });
                Response::ok(format!("Added successfully: {}", key))
            }
            Err(AddError::Duplicate) => Response::fail(format!("Key already exists: {}", key)),
        }
    }

    fn remove(&mut self, key: &str) -> Response {
        match self.table.remove(key) {
            Some(removed) => {
                self.notify(ChangeEvent::Removed { key: &removed });
                Response::ok(format!("Removed successfully: {}", removed))
            }
            None => Response::fail(format!("Key not found: {}", key)),
        }
    }

    fn notify(&mut self, event: ChangeEvent<'_>) {
        self.view.on_change(&event, &self.table);
    }
}
