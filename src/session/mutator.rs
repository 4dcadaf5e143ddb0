//! Session writes: logout and the demo role switch.
//!
//! Each operation finishes its store writes before returning a
//! [`SessionEffect`], so any navigation the caller performs afterwards
//! resolves against the updated stores.

#[cfg(test)]
#[path = "mutator_test.rs"]
mod mutator_test;

use super::resolver::SessionState;
use super::role::Role;
use super::store::{CookieJar, KeyValueStore, StoreError};
use crate::config::NavConfig;

/// Follow-up the view must perform after a mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEffect {
    /// Replace the rendered session with `state`, then navigate to
    /// `redirect` if one is given.
    Refresh {
        state: SessionState,
        redirect: Option<String>,
    },
    /// Throw away all local state and re-read the stores from a fresh page
    /// load. Only the demo role switch asks for this.
    FullReload,
}

/// Error returned by [`SessionMutator::set_role`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MutationError {
    #[error("demo role switching is disabled")]
    DemoSwitchDisabled,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Sole in-crate writer of the session stores.
#[derive(Clone, Debug)]
pub struct SessionMutator<C, S> {
    cookies: C,
    storage: S,
    config: NavConfig,
}

impl<C: CookieJar, S: KeyValueStore> SessionMutator<C, S> {
    pub fn new(cookies: C, storage: S, config: NavConfig) -> Self {
        Self {
            cookies,
            storage,
            config,
        }
    }

    /// Clear both session flags and the role tag, then send the user home.
    ///
    /// Every clear is attempted even if an earlier one fails. Failures are
    /// logged; the rendered state becomes anonymous regardless.
    pub fn logout(&self) -> SessionEffect {
        let results = [
            self.cookies.expire(&self.config.auth_cookie),
            self.storage.remove(&self.config.auth_key),
            self.storage.remove(&self.config.role_key),
        ];
        for err in results.into_iter().filter_map(Result::err) {
            leptos::logging::warn!("logout: {err}");
        }
        SessionEffect::Refresh {
            state: SessionState::Anonymous,
            redirect: Some(self.config.home_route.clone()),
        }
    }

    /// Persist `role` for preview and request a full reload.
    ///
    /// Authentication flags are left untouched: switching roles while
    /// anonymous stores the tag but the next resolution is still anonymous.
    ///
    /// # Errors
    ///
    /// [`MutationError::DemoSwitchDisabled`] when the config turns the demo
    /// switch off, [`MutationError::Store`] when the write fails.
    pub fn set_role(&self, role: Role) -> Result<SessionEffect, MutationError> {
        if !self.config.demo_role_switch {
            return Err(MutationError::DemoSwitchDisabled);
        }
        self.storage.set(&self.config.role_key, role.as_str())?;
        leptos::logging::log!("demo role switched to {role}");
        Ok(SessionEffect::FullReload)
    }
}
