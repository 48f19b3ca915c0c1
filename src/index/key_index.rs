//! Key index implementation
//!
//! BTreeMap-based ordered map from key to current value.

use std::collections::BTreeMap;

/// Ordered key → value map
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeyIndex {
    entries: BTreeMap<String, String>,
}

impl KeyIndex {
    /// Create a new empty KeyIndex
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current value of a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Insert or replace a key
    ///
    /// Returns the value that was replaced, or `None` if the key is new.
    pub fn put(&mut self, key: String, value: String) -> Option<String> {
        self.entries.insert(key, value)
    }

    /// Remove a key, returning the value it held
    ///
    /// Removing from an empty index or removing an absent key changes
    /// nothing and returns `None`.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        self.entries.remove(key)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (key, value) pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
