//! Count index implementation
//!
//! Tracks how many keys currently hold each value. An entry exists only
//! while its count is at least one.

use std::collections::BTreeMap;

/// Ordered value → occurrence count map
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CountIndex {
    counts: BTreeMap<String, usize>,
}

impl CountIndex {
    /// Create a new empty CountIndex
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more key holding `value`
    pub fn increment(&mut self, value: &str) {
        match self.counts.get_mut(value) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(value.to_owned(), 1);
            }
        }
    }

    /// Record one fewer key holding `value`
    ///
    /// The entry is dropped when it reaches zero. A value with no entry is
    /// left alone.
    pub fn decrement(&mut self, value: &str) {
        let Some(count) = self.counts.get_mut(value) else {
            return;
        };
        *count -= 1;
        if *count == 0 {
            self.counts.remove(value);
        }
    }

    /// Number of keys holding `value` (0 if none)
    pub fn count_of(&self, value: &str) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Number of distinct values
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate over (value, count) pairs in value order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(v, c)| (v.as_str(), *c))
    }
}
