//! Protocol codec
//!
//! Parsing of command lines and writing of responses.
//!
//! ## Line Format
//! ```text
//! KEYWORD [arg1 [arg2 ...]]
//! ```
//! - Tokens are separated by whitespace
//! - Keywords are case-insensitive, arguments are kept as written
//! - Surplus arguments are ignored
//!
//! ### Arguments by Command
//! - SET:      key value
//! - GET:      key
//! - DELETE:   key
//! - COUNT:    value
//! - BEGIN, ROLLBACK, COMMIT, END: none

use std::io::{BufRead, Write};

use super::{Command, CommandType, Response};
use crate::error::{Result, TallyError};

// =============================================================================
// Command Parsing
// =============================================================================

/// Parse one command line
///
/// Returns `Ok(None)` for a blank line. Unknown keywords produce
/// `TallyError::UnknownCommand`; whether to report them is up to the caller.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let mut tokens = line.split_whitespace();

    let Some(word) = tokens.next() else {
        return Ok(None);
    };

    let command_type = CommandType::from_keyword(word)
        .ok_or_else(|| TallyError::UnknownCommand(word.to_string()))?;

    let args: Vec<&str> = tokens.take(command_type.arity()).collect();
    if args.len() < command_type.arity() {
        return Err(TallyError::MissingArguments {
            command: command_type.keyword(),
            expected: command_type.arity(),
        });
    }

    let command = match command_type {
        CommandType::Set => Command::Set {
            key: args[0].to_string(),
            value: args[1].to_string(),
        },
        CommandType::Get => Command::Get {
            key: args[0].to_string(),
        },
        CommandType::Delete => Command::Delete {
            key: args[0].to_string(),
        },
        CommandType::Count => Command::Count {
            value: args[0].to_string(),
        },
        CommandType::Begin => Command::Begin,
        CommandType::Rollback => Command::Rollback,
        CommandType::Commit => Command::Commit,
        CommandType::End => Command::End,
    };

    Ok(Some(command))
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read one line into `buf`, without its line terminator
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// failing the read. Returns false at end of input.
pub fn read_line<R: BufRead>(reader: &mut R, buf: &mut String) -> Result<bool> {
    buf.clear();

    let mut bytes = Vec::new();
    if reader.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(false);
    }

    buf.push_str(&String::from_utf8_lossy(&bytes));
    let trimmed = buf.trim_end_matches(['\n', '\r']).len();
    buf.truncate(trimmed);
    Ok(true)
}

/// Write a response, if it has any output
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<()> {
    if let Some(line) = response.render() {
        writeln!(writer, "{}", line)?;
        writer.flush()?;
    }
    Ok(())
}

/// Write the prompt without a trailing newline
pub fn write_prompt<W: Write>(writer: &mut W, prompt: &str) -> Result<()> {
    writer.write_all(prompt.as_bytes())?;
    writer.flush()?;
    Ok(())
}
