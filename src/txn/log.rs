//! Transaction log implementation

use std::collections::VecDeque;

use super::{UndoCommand, UndoTarget};

/// Undo commands recorded while one transaction is the innermost
///
/// Commands are kept newest-first, so iterating a frame yields them in
/// the order they must be replayed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TransactionFrame {
    commands: VecDeque<UndoCommand>,
}

impl TransactionFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a command
    pub fn push(&mut self, command: UndoCommand) {
        self.commands.push_front(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands in replay order
    pub fn iter(&self) -> impl Iterator<Item = &UndoCommand> {
        self.commands.iter()
    }
}

impl IntoIterator for TransactionFrame {
    type Item = UndoCommand;
    type IntoIter = std::collections::vec_deque::IntoIter<UndoCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

/// Stack of open transaction frames, outermost first
#[derive(Debug, Default)]
pub struct TransactionLog {
    frames: Vec<TransactionFrame>,
}

impl TransactionLog {
    /// Create a log with no open transaction
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new innermost frame, returning the new depth
    pub fn begin(&mut self) -> usize {
        self.frames.push(TransactionFrame::new());
        self.frames.len()
    }

    /// Record an undo command into the innermost frame
    ///
    /// The command is dropped when no transaction is open.
    pub fn record(&mut self, command: UndoCommand) {
        if let Some(frame) = self.frames.last_mut() {
            frame.push(command);
        }
    }

    /// Pop the innermost frame and replay it against `target`
    ///
    /// Returns the number of commands replayed, or `None` if no
    /// transaction was open.
    pub fn rollback<T: UndoTarget>(&mut self, target: &mut T) -> Option<usize> {
        let frame = self.frames.pop()?;
        let replayed = frame.len();
        for command in frame {
            target.apply_undo(command);
        }
        Some(replayed)
    }

    /// Make every open transaction permanent at once
    ///
    /// Discards all frames at every depth, returning how many were open.
    pub fn commit(&mut self) -> usize {
        let discarded = self.frames.len();
        self.frames.clear();
        discarded
    }

    /// Current nesting depth (0 = no transaction)
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_active(&self) -> bool {
        !self.frames.is_empty()
    }

    /// Undo commands recorded across all open frames
    pub fn pending_undo_count(&self) -> usize {
        self.frames.iter().map(TransactionFrame::len).sum()
    }

    /// The innermost frame, if any
    pub fn current(&self) -> Option<&TransactionFrame> {
        self.frames.last()
    }
}
