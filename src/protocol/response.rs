//! Response definitions
//!
//! Represents the result of executing a command.

use crate::store::NULL;

/// A response to write back to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Result of GET (`None` when the key is absent)
    Value(Option<String>),

    /// Result of COUNT
    Count(usize),

    /// Command succeeded with nothing to print
    Done,
}

impl Response {
    /// Create a GET response from a lookup
    pub fn value(value: Option<&str>) -> Self {
        Response::Value(value.map(str::to_owned))
    }

    /// The output line for this response, if it has one
    ///
    /// An absent value renders as the `NULL` sentinel.
    pub fn render(&self) -> Option<String> {
        match self {
            Response::Value(Some(value)) => Some(value.clone()),
            Response::Value(None) => Some(NULL.to_string()),
            Response::Count(count) => Some(count.to_string()),
            Response::Done => None,
        }
    }
}
