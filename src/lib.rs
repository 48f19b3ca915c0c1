//! # TallyKV
//!
//! An in-memory key-value store with:
//! - Ordered key index with O(log n) get/set/delete
//! - Per-value counts, always consistent with the keys
//! - Nested transactions with rollback and commit
//! - A line-oriented text protocol and interactive session
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Session (stdin / script)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  parse_command / write_response
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Store                                 │
//! │          (records undo, keeps indexes in step)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼─────────────────────┐
//!          │            │                     │
//!          ▼            ▼                     ▼
//!   ┌─────────────┐ ┌─────────────┐   ┌───────────────┐
//!   │  KeyIndex   │ │ CountIndex  │   │TransactionLog │
//!   │ (BTreeMap)  │ │ (BTreeMap)  │   │ (undo frames) │
//!   └─────────────┘ └─────────────┘   └───────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use tallykv::Store;
//!
//! let mut store = Store::new();
//! store.set("a", "foo");
//! store.begin();
//! store.set("a", "bar");
//! assert_eq!(store.count("bar"), 1);
//! store.rollback();
//! assert_eq!(store.get("a"), Some("foo"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod index;
pub mod protocol;
pub mod repl;
pub mod shared;
pub mod store;
pub mod txn;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::Config;
pub use error::{Result, TallyError};
pub use shared::SharedStore;
pub use store::{Store, NULL};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of TallyKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
