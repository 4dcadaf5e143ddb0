//! Independent sources of "a session exists" evidence.
//!
//! DESIGN
//! ======
//! The login flow writes a cookie and a fallback-store flag, and the two do
//! not always land together (cookie blocked, storage cleared by the user).
//! Each source is one [`SessionIndicator`]; the resolver treats any single
//! present indicator as sufficient. This is tolerance to partial
//! propagation, not a security boundary.

#[cfg(test)]
#[path = "indicator_test.rs"]
mod indicator_test;

use super::store::{CookieJar, KeyValueStore};

/// Fallback-store value that marks a session.
pub const FLAG_SET: &str = "true";

/// One boolean source of session evidence.
pub trait SessionIndicator {
    /// Short name for diagnostics.
    fn source(&self) -> &'static str;

    /// Whether this source currently reports a session.
    fn is_present(&self) -> bool;
}

/// Present when the jar holds the named cookie.
pub struct CookieIndicator<'a, C> {
    jar: &'a C,
    name: &'a str,
}

impl<'a, C: CookieJar> CookieIndicator<'a, C> {
    pub fn new(jar: &'a C, name: &'a str) -> Self {
        Self { jar, name }
    }
}

impl<C: CookieJar> SessionIndicator for CookieIndicator<'_, C> {
    fn source(&self) -> &'static str {
        "cookie"
    }

    fn is_present(&self) -> bool {
        self.jar.has(self.name)
    }
}

/// Present when the store value at `key` is exactly [`FLAG_SET`].
pub struct StorageIndicator<'a, S> {
    store: &'a S,
    key: &'a str,
}

impl<'a, S: KeyValueStore> StorageIndicator<'a, S> {
    pub fn new(store: &'a S, key: &'a str) -> Self {
        Self { store, key }
    }
}

impl<S: KeyValueStore> SessionIndicator for StorageIndicator<'_, S> {
    fn source(&self) -> &'static str {
        "fallback store"
    }

    fn is_present(&self) -> bool {
        self.store.get(self.key).as_deref() == Some(FLAG_SET)
    }
}

/// OR-combine indicators. Empty input means no session.
pub fn any_present(indicators: &[&dyn SessionIndicator]) -> bool {
    indicators.iter().any(|indicator| indicator.is_present())
}
