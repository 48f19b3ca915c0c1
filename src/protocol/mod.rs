//! Protocol Module
//!
//! Defines the text protocol spoken by a session.
//!
//! ## Commands
//! - SET key value   - no output
//! - GET key         - value, or NULL
//! - DELETE key      - no output
//! - COUNT value     - number of keys holding value
//! - BEGIN           - open a nested transaction
//! - ROLLBACK        - undo the innermost transaction
//! - COMMIT          - make every open transaction permanent
//! - END             - end the session
//!
//! ## Errors
//! Too few arguments yields `<KEYWORD> requires <n> string inputs`.
//! Unknown keywords are skipped unless strict mode is on.

mod codec;
mod command;
mod response;

pub use codec::{parse_command, read_line, write_prompt, write_response};
pub use command::{Command, CommandType};
pub use response::Response;
