//! Storage seams the session layer reads from and writes to.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two process-wide stores hold session evidence: the cookie jar and a
//! fallback key/value store (`localStorage` in the browser). Both are shared
//! with code outside this crate (the login flow), so nothing here caches a
//! read. The in-memory implementations back tests and non-browser renders.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

/// Error returned by store writes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The backing store could not be reached (no window, storage disabled).
    #[error("{store} is unavailable")]
    Unavailable { store: &'static str },
    /// The backing store refused the write.
    #[error("{store} rejected write to `{key}`: {reason}")]
    Rejected {
        store: &'static str,
        key: String,
        reason: String,
    },
}

/// Cookie-backed session evidence.
pub trait CookieJar {
    /// Whether a cookie named `name` is currently set.
    fn has(&self, name: &str) -> bool;

    /// Expire the cookie named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the jar cannot be written.
    fn expire(&self, name: &str) -> Result<(), StoreError>;
}

/// Persistent string key/value store.
pub trait KeyValueStore {
    /// Read `key`; missing keys and unreadable stores both yield `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory cookie jar. Clones share the same cookies.
#[derive(Clone, Debug, Default)]
pub struct MemoryCookies {
    names: Rc<RefCell<BTreeSet<String>>>,
}

impl MemoryCookies {
    /// Set a cookie, as an external login flow would.
    pub fn insert(&self, name: &str) {
        self.names.borrow_mut().insert(name.to_owned());
    }
}

impl CookieJar for MemoryCookies {
    fn has(&self, name: &str) -> bool {
        self.names.borrow().contains(name)
    }

    fn expire(&self, name: &str) -> Result<(), StoreError> {
        self.names.borrow_mut().remove(name);
        Ok(())
    }
}

/// In-memory key/value store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
    read_only: bool,
}

impl MemoryStorage {
    /// A store that rejects every write, like `localStorage` under a full
    /// quota or a locked-down private window.
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Seed an entry without going through the write checks.
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    fn check_writable(&self, key: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::Rejected {
                store: "memory storage",
                key: key.to_owned(),
                reason: "read-only".to_owned(),
            });
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_writable(key)?;
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.check_writable(key)?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
