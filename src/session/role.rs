//! Role tag attached to an authenticated session.
//!
//! The tag is a presentation hint persisted by the login flow under the
//! fallback store's `user_type` key. It gates a handful of nav links and is
//! never treated as an authorization decision.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a persisted role string is not one of the known tags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role tag: {0:?}")]
pub struct UnknownRole(pub String);

/// Account flavor selected at registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Default when a session exists but no tag was recorded.
    #[default]
    Freelancer,
    Business,
    JobPoster,
}

impl Role {
    /// All roles in the order the demo selector lists them.
    pub const ALL: [Role; 3] = [Role::Freelancer, Role::Business, Role::JobPoster];

    /// Storage representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Freelancer => "freelancer",
            Self::Business => "business",
            Self::JobPoster => "job-poster",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Freelancer => "Freelancer",
            Self::Business => "Business",
            Self::JobPoster => "Job Poster",
        }
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "freelancer" => Ok(Self::Freelancer),
            "business" => Ok(Self::Business),
            "job-poster" => Ok(Self::JobPoster),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
