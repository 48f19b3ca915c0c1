//! Transaction Module
//!
//! Nested transactions built from an undo log.
//!
//! ## Responsibilities
//! - Open frames on BEGIN, one per nesting level
//! - Record the undo command for every mutation into the innermost frame
//! - Replay the innermost frame on ROLLBACK
//! - Forget every frame on COMMIT
//!
//! ## Frame Layout
//! ```text
//! stack (outermost first)
//! ┌──────────────┬──────────────┬──────────────┐
//! │   frame 0    │   frame 1    │   frame 2    │ ◄── record / rollback
//! └──────────────┴──────────────┴──────────────┘
//!                                 │
//!                                 ▼
//!                 newest undo ... oldest undo   (replay order)
//! ```
//!
//! Replay goes through an [`UndoTarget`], which only exposes the raw
//! mutation primitives. Replayed mutations therefore never record undo
//! commands of their own.

mod log;
mod undo;

pub use log::{TransactionFrame, TransactionLog};
pub use undo::UndoCommand;

/// Something undo commands can be replayed against
pub trait UndoTarget {
    /// Apply one undo command without recording anything
    fn apply_undo(&mut self, command: UndoCommand);
}
