//! Shared Store
//!
//! A cloneable handle that serializes every call into one [`Store`].
//!
//! The store itself is single-owner. Hosts that need several threads to
//! reach the same store go through this handle, which holds one exclusive
//! lock for the whole of each operation. Transactions are per store, not
//! per handle: a `begin` through one clone is visible to all of them.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::protocol::{Command, Response};
use crate::store::Store;

/// Thread-safe handle to a single store
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<Store>>,
}

impl SharedStore {
    /// Wrap a fresh, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing store
    pub fn from_store(store: Store) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Run `f` with exclusive access to the store
    ///
    /// Use this to group several operations so no other handle can
    /// interleave with them.
    pub fn with<T>(&self, f: impl FnOnce(&mut Store) -> T) -> T {
        let mut store = self.inner.lock();
        f(&mut store)
    }

    /// Execute one command under the lock
    pub fn execute(&self, command: Command) -> Response {
        self.inner.lock().execute(command)
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.lock().set(key, value);
    }

    /// Owned copy of a key's value
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().get(key).map(str::to_owned)
    }

    pub fn delete(&self, key: &str) {
        self.inner.lock().delete(key);
    }

    pub fn count(&self, value: &str) -> usize {
        self.inner.lock().count(value)
    }

    pub fn begin(&self) {
        self.inner.lock().begin();
    }

    pub fn rollback(&self) {
        self.inner.lock().rollback();
    }

    pub fn commit(&self) {
        self.inner.lock().commit();
    }

    /// Take the store back out if this is the last handle
    pub fn try_unwrap(self) -> Result<Store, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}
