//! Session Handler
//!
//! Runs the read-eval-print loop for one reader/writer pair.

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::error::{Result, TallyError};
use crate::protocol::{parse_command, read_line, write_prompt, write_response, Command};
use crate::store::Store;

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// An `END` command was read
    End,

    /// The input ran out
    Eof,
}

/// What to do after one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Stop,
}

/// Handles a single interactive or scripted session
pub struct Session<R, W> {
    /// Command source
    reader: R,

    /// Response sink
    writer: W,

    /// The store this session drives
    store: Store,

    /// Session configuration
    config: Config,

    /// Lines read so far, for logging
    lines_read: u64,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session over an empty store
    pub fn new(reader: R, writer: W, config: Config) -> Self {
        Self::with_store(reader, writer, config, Store::new())
    }

    /// Create a session over an existing store
    pub fn with_store(reader: R, writer: W, config: Config, store: Store) -> Self {
        Self {
            reader,
            writer,
            store,
            config,
            lines_read: 0,
        }
    }

    /// Run the session (blocking until END or end of input)
    ///
    /// Bad command lines are reported on the writer and skipped. I/O errors
    /// end the session.
    pub fn run(&mut self) -> Result<SessionEnd> {
        tracing::debug!("Session started");
        let mut line = String::new();

        loop {
            if self.config.show_prompt {
                write_prompt(&mut self.writer, &self.config.prompt)?;
            }

            if !read_line(&mut self.reader, &mut line)? {
                tracing::debug!(lines = self.lines_read, "Session input exhausted");
                return Ok(SessionEnd::Eof);
            }

            if self.handle_line(&line)? == LineOutcome::Stop {
                tracing::debug!(lines = self.lines_read, "Session ended by END");
                return Ok(SessionEnd::End);
            }
        }
    }

    /// Parse, execute and answer one command line
    pub fn handle_line(&mut self, line: &str) -> Result<LineOutcome> {
        self.lines_read += 1;

        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(LineOutcome::Continue),
            Err(TallyError::UnknownCommand(word)) if !self.config.strict_commands => {
                tracing::trace!(%word, "Skipping unknown command");
                return Ok(LineOutcome::Continue);
            }
            Err(e) if e.is_protocol() => {
                tracing::debug!(line = self.lines_read, error = %e, "Rejected command");
                writeln!(self.writer, "{}", e)?;
                self.writer.flush()?;
                return Ok(LineOutcome::Continue);
            }
            Err(e) => return Err(e),
        };

        tracing::trace!(line = self.lines_read, %command, "Received command");

        if command == Command::End {
            return Ok(LineOutcome::Stop);
        }

        let response = self.store.execute(command);
        write_response(&mut self.writer, &response)?;
        Ok(LineOutcome::Continue)
    }

    /// The store this session drives
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Number of lines read so far
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    /// Finish the session, returning its store and writer
    pub fn into_parts(self) -> (Store, W) {
        (self.store, self.writer)
    }
}
