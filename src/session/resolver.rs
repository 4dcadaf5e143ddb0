//! Session state derivation from the cookie jar and fallback store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation bar calls [`SessionResolver::resolve`] on mount and again
//! on every route change, so a login completed elsewhere shows up without a
//! reload. Resolution only reads; writes belong to the mutator.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use serde::{Deserialize, Serialize};

use super::indicator::{CookieIndicator, SessionIndicator, StorageIndicator, any_present};
use super::role::Role;
use super::store::{CookieJar, KeyValueStore};
use crate::config::NavConfig;

/// Derived session state. Rebuilt on each resolution, never patched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "role", rename_all = "kebab-case")]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(Role),
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Role tag; always `None` for anonymous sessions.
    #[must_use]
    pub fn role(self) -> Option<Role> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(role) => Some(role),
        }
    }
}

/// Read-only view over the two session stores.
#[derive(Clone, Debug)]
pub struct SessionResolver<C, S> {
    cookies: C,
    storage: S,
    config: NavConfig,
}

impl<C: CookieJar, S: KeyValueStore> SessionResolver<C, S> {
    pub fn new(cookies: C, storage: S, config: NavConfig) -> Self {
        Self {
            cookies,
            storage,
            config,
        }
    }

    /// Derive the current session state.
    pub fn resolve(&self) -> SessionState {
        let cookie = CookieIndicator::new(&self.cookies, &self.config.auth_cookie);
        let flag = StorageIndicator::new(&self.storage, &self.config.auth_key);
        if !any_present(&[&cookie as &dyn SessionIndicator, &flag]) {
            return SessionState::Anonymous;
        }
        SessionState::Authenticated(self.stored_role().unwrap_or_default())
    }

    /// Persisted role tag. Unknown tags read as absent.
    fn stored_role(&self) -> Option<Role> {
        let raw = self.storage.get(&self.config.role_key)?;
        match raw.parse() {
            Ok(role) => Some(role),
            Err(e) => {
                leptos::logging::warn!("ignoring persisted role: {e}");
                None
            }
        }
    }
}
