//! Index Module
//!
//! The two in-memory maps behind the store.
//!
//! ## Responsibilities
//! - `KeyIndex`: the current key → value mapping
//! - `CountIndex`: value → number of keys currently holding it
//!
//! ## Data Structure Choice
//! Both are plain `BTreeMap`s:
//! - O(log n) lookup, insert and delete
//! - Sorted iteration for diagnostics and consistency checks
//!
//! Neither index knows about the other. Keeping them in step is the job
//! of [`crate::store::Store`].

mod count_index;
mod key_index;

pub use count_index::CountIndex;
pub use key_index::KeyIndex;
