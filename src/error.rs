//! Error types for TallyKV
//!
//! The store itself is total: every operation succeeds for any pair of
//! strings. Errors only come from the layers around it (reading input,
//! parsing command lines, writing output).

use thiserror::Error;

/// Result type alias using TallyError
pub type Result<T> = std::result::Result<T, TallyError>;

/// Unified error type for TallyKV
#[derive(Debug, Error)]
pub enum TallyError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("{command} requires {expected} string inputs")]
    MissingArguments {
        command: &'static str,
        expected: usize,
    },

    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

impl TallyError {
    /// Whether this error describes a bad input line rather than a failure
    /// of the session itself
    pub fn is_protocol(&self) -> bool {
        matches!(
            self,
            TallyError::MissingArguments { .. } | TallyError::UnknownCommand(_)
        )
    }
}
