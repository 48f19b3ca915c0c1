//! Undo command definitions

/// The inverse of one mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoCommand {
    /// Put `key` back to the value it held before
    Set { key: String, value: String },

    /// Remove `key`, which did not exist before
    Delete { key: String },
}

impl UndoCommand {
    /// Undo for a mutation of `key`, given the value it held beforehand
    pub fn restore(key: impl Into<String>, previous: Option<&str>) -> Self {
        match previous {
            Some(value) => UndoCommand::Set {
                key: key.into(),
                value: value.to_owned(),
            },
            None => UndoCommand::Delete { key: key.into() },
        }
    }

    /// The key this command touches
    pub fn key(&self) -> &str {
        match self {
            UndoCommand::Set { key, .. } | UndoCommand::Delete { key } => key,
        }
    }
}
