//! Client-local session state: where it is stored, how it is derived, and
//! how it is changed.
//!
//! ARCHITECTURE
//! ============
//! `store` defines the cookie and fallback-store seams, `indicator` turns
//! them into session evidence, `resolver` derives [`SessionState`], and
//! `mutator` performs logout and the demo role switch. [`Session`] bundles a
//! resolver and mutator over the same store handles.

pub mod browser;
pub mod cookie;
pub mod indicator;
pub mod mutator;
pub mod resolver;
pub mod role;
pub mod store;

pub use mutator::{MutationError, SessionEffect, SessionMutator};
pub use resolver::{SessionResolver, SessionState};
pub use role::Role;

use crate::config::NavConfig;
use browser::{BrowserCookies, BrowserStorage};
use store::{CookieJar, KeyValueStore};

/// Resolver and mutator sharing one pair of stores.
#[derive(Clone, Debug)]
pub struct Session<C, S> {
    pub resolver: SessionResolver<C, S>,
    pub mutator: SessionMutator<C, S>,
}

impl<C, S> Session<C, S>
where
    C: CookieJar + Clone,
    S: KeyValueStore + Clone,
{
    pub fn new(cookies: C, storage: S, config: NavConfig) -> Self {
        Self {
            resolver: SessionResolver::new(cookies.clone(), storage.clone(), config.clone()),
            mutator: SessionMutator::new(cookies, storage, config),
        }
    }
}

impl Session<BrowserCookies, BrowserStorage> {
    /// Session over `document.cookie` and `window.localStorage`.
    pub fn browser(config: NavConfig) -> Self {
        Self::new(BrowserCookies, BrowserStorage, config)
    }
}
