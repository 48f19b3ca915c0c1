//! Store Module
//!
//! The transactional key-value engine.
//!
//! ## Responsibilities
//! - Keep the key index and the count index in step
//! - Record an undo command for every mutation made inside a transaction
//! - Replay undo commands on rollback without recording new ones

use tracing::{debug, trace};

use crate::index::{CountIndex, KeyIndex};
use crate::protocol::{Command, Response};
use crate::txn::{TransactionLog, UndoCommand, UndoTarget};

/// Returned at the text surface for a key that does not exist
pub const NULL: &str = "NULL";

/// The two indexes and the raw mutations that keep them consistent
///
/// Nothing here can reach the transaction log, so rollback replays
/// through this type and records nothing.
#[derive(Debug, Default)]
struct Tables {
    keys: KeyIndex,
    counts: CountIndex,
}

impl Tables {
    /// Set `key` to `value`, returning the previous value
    ///
    /// The new value is counted before the old one is released, so
    /// re-setting an identical value never drops its count to zero.
    fn apply_set(&mut self, key: String, value: String) -> Option<String> {
        self.counts.increment(&value);
        let previous = self.keys.put(key, value);
        if let Some(old) = &previous {
            self.counts.decrement(old);
        }
        previous
    }

    /// Remove `key`, returning the value it held
    fn apply_delete(&mut self, key: &str) -> Option<String> {
        let removed = self.keys.remove(key)?;
        self.counts.decrement(&removed);
        Some(removed)
    }
}

impl UndoTarget for Tables {
    fn apply_undo(&mut self, command: UndoCommand) {
        trace!(?command, "replaying undo");
        match command {
            UndoCommand::Set { key, value } => {
                self.apply_set(key, value);
            }
            UndoCommand::Delete { key } => {
                self.apply_delete(&key);
            }
        }
    }
}

/// The main store
///
/// ## Execution Model
///
/// One owner, `&mut self` for every mutation, no internal locking. Every
/// operation runs to completion in O(log n). Callers that need shared
/// access wrap the store in [`crate::shared::SharedStore`].
///
/// ## Transactions
///
/// `begin` opens a nested frame. `rollback` undoes the innermost frame.
/// `commit` makes every open frame permanent at once, not just the
/// innermost one.
#[derive(Debug, Default)]
pub struct Store {
    /// Key and count indexes
    tables: Tables,

    /// Open transaction frames
    log: TransactionLog,
}

impl Store {
    /// Create an empty store with no open transaction
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a command
    ///
    /// Routes commands to the matching operation. `END` is handled by the
    /// session and is a no-op here.
    pub fn execute(&mut self, command: Command) -> Response {
        match command {
            Command::Set { key, value } => {
                self.set(key, value);
                Response::Done
            }
            Command::Get { key } => Response::value(self.get(&key)),
            Command::Delete { key } => {
                self.delete(&key);
                Response::Done
            }
            Command::Count { value } => Response::Count(self.count(&value)),
            Command::Begin => {
                self.begin();
                Response::Done
            }
            Command::Rollback => {
                self.rollback();
                Response::Done
            }
            Command::Commit => {
                self.commit();
                Response::Done
            }
            Command::End => Response::Done,
        }
    }

    /// Set a key to a value
    ///
    /// Steps:
    /// 1. Work out the undo (restore the old value, or delete a new key)
    /// 2. Record it in the innermost transaction, if any
    /// 3. Apply the change to both indexes
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        // Undo is only built while a transaction is open to record it
        if self.log.is_active() {
            let undo = UndoCommand::restore(key.as_str(), self.tables.keys.get(&key));
            self.log.record(undo);
        }

        trace!(%key, %value, "set");
        self.tables.apply_set(key, value);
    }

    /// Get the value of a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.tables.keys.get(key)
    }

    /// Get the value of a key, or the `NULL` sentinel
    pub fn get_or_null(&self, key: &str) -> &str {
        self.get(key).unwrap_or(NULL)
    }

    /// Delete a key
    ///
    /// Deleting a key that does not exist records nothing and changes
    /// nothing.
    pub fn delete(&mut self, key: &str) {
        let Some(previous) = self.tables.keys.get(key) else {
            return;
        };

        if self.log.is_active() {
            self.log.record(UndoCommand::Set {
                key: key.to_owned(),
                value: previous.to_owned(),
            });
        }

        trace!(%key, "delete");
        self.tables.apply_delete(key);
    }

    /// Number of keys currently holding `value`
    pub fn count(&self, value: &str) -> usize {
        self.tables.counts.count_of(value)
    }

    /// Open a (nested) transaction
    pub fn begin(&mut self) {
        let depth = self.log.begin();
        debug!(depth, "transaction opened");
    }

    /// Undo everything since the innermost `begin`
    ///
    /// No-op when no transaction is open.
    pub fn rollback(&mut self) {
        match self.log.rollback(&mut self.tables) {
            Some(replayed) => debug!(
                replayed,
                depth = self.log.depth(),
                "transaction rolled back"
            ),
            None => debug!("rollback with no open transaction"),
        }
    }

    /// Make every open transaction permanent
    ///
    /// No-op when no transaction is open.
    pub fn commit(&mut self) {
        let discarded = self.log.commit();
        debug!(discarded, "transactions committed");
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of keys
    pub fn key_count(&self) -> usize {
        self.tables.keys.len()
    }

    /// Number of distinct values held by at least one key
    pub fn distinct_values(&self) -> usize {
        self.tables.counts.len()
    }

    /// Current transaction nesting depth (0 = none)
    pub fn transaction_depth(&self) -> usize {
        self.log.depth()
    }

    pub fn in_transaction(&self) -> bool {
        self.log.is_active()
    }

    /// Read-only view of the key index
    pub fn keys(&self) -> &KeyIndex {
        &self.tables.keys
    }

    /// Read-only view of the count index
    pub fn counts(&self) -> &CountIndex {
        &self.tables.counts
    }

    /// Recompute the count index from the key index and compare
    ///
    /// O(n). Checks that every count matches the number of keys holding
    /// that value, that no zero counts are stored, and that the counts sum
    /// to the number of keys.
    pub fn is_consistent(&self) -> bool {
        let mut expected = CountIndex::new();
        for (_, value) in self.tables.keys.iter() {
            expected.increment(value);
        }

        expected == self.tables.counts
            && self.tables.counts.iter().all(|(_, count)| count > 0)
            && self.tables.counts.total() == self.tables.keys.len()
    }
}
