//! Navigation bar configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Store keys are shared with the login and registration flows, which write
//! the flags this crate reads. `App` provides a [`NavConfig`] through Leptos
//! context; components fall back to [`NavConfig::default`] when none is set.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// Keys, routes, and feature switches for the navigation bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Cookie whose presence marks a session.
    pub auth_cookie: String,
    /// Fallback-store key holding the `"true"` session flag.
    pub auth_key: String,
    /// Fallback-store key holding the role tag.
    pub role_key: String,
    /// Route to land on after logout.
    pub home_route: String,
    /// Show the demo role selector and accept role switches.
    pub demo_role_switch: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            auth_cookie: "auth_token".to_owned(),
            auth_key: "auth_token".to_owned(),
            role_key: "user_type".to_owned(),
            home_route: "/".to_owned(),
            demo_role_switch: cfg!(debug_assertions),
        }
    }
}

impl NavConfig {
    /// Parse a JSON config object; omitted fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Copy of this config with the demo role switch set to `enabled`.
    #[must_use]
    pub fn with_demo_role_switch(mut self, enabled: bool) -> Self {
        self.demo_role_switch = enabled;
        self
    }
}
