//! REPL Module
//!
//! Line-oriented sessions driving a store.
//!
//! ## Architecture
//! - One session owns one store
//! - Any `BufRead` source (stdin, a script file, an in-memory buffer)
//! - Any `Write` sink for responses and error messages

mod session;

pub use session::{LineOutcome, Session, SessionEnd};
