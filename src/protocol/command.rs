//! Command definitions
//!
//! Represents commands read from a session.

use std::fmt;

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Set,
    Get,
    Delete,
    Count,
    Begin,
    Rollback,
    Commit,
    End,
}

impl CommandType {
    pub const ALL: [CommandType; 8] = [
        CommandType::Set,
        CommandType::Get,
        CommandType::Delete,
        CommandType::Count,
        CommandType::Begin,
        CommandType::Rollback,
        CommandType::Commit,
        CommandType::End,
    ];

    /// Keyword as written in a command line
    pub fn keyword(self) -> &'static str {
        match self {
            CommandType::Set => "SET",
            CommandType::Get => "GET",
            CommandType::Delete => "DELETE",
            CommandType::Count => "COUNT",
            CommandType::Begin => "BEGIN",
            CommandType::Rollback => "ROLLBACK",
            CommandType::Commit => "COMMIT",
            CommandType::End => "END",
        }
    }

    /// Number of arguments the command needs
    pub fn arity(self) -> usize {
        match self {
            CommandType::Set => 2,
            CommandType::Get | CommandType::Delete | CommandType::Count => 1,
            CommandType::Begin
            | CommandType::Rollback
            | CommandType::Commit
            | CommandType::End => 0,
        }
    }

    /// Look up a keyword, ignoring ASCII case
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.keyword().eq_ignore_ascii_case(word))
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set a key to a value
    Set { key: String, value: String },

    /// Get the value of a key
    Get { key: String },

    /// Delete a key
    Delete { key: String },

    /// Count keys holding a value
    Count { value: String },

    /// Open a (nested) transaction
    Begin,

    /// Undo the innermost transaction
    Rollback,

    /// Make all open transactions permanent
    Commit,

    /// End the session
    End,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Set { .. } => CommandType::Set,
            Command::Get { .. } => CommandType::Get,
            Command::Delete { .. } => CommandType::Delete,
            Command::Count { .. } => CommandType::Count,
            Command::Begin => CommandType::Begin,
            Command::Rollback => CommandType::Rollback,
            Command::Commit => CommandType::Commit,
            Command::End => CommandType::End,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = self.command_type().keyword();
        match self {
            Command::Set { key, value } => write!(f, "{} {} {}", keyword, key, value),
            Command::Get { key } | Command::Delete { key } => write!(f, "{} {}", keyword, key),
            Command::Count { value } => write!(f, "{} {}", keyword, value),
            Command::Begin | Command::Rollback | Command::Commit | Command::End => {
                f.write_str(keyword)
            }
        }
    }
}
