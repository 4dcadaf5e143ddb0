//! Static link catalog and the visibility rules applied to it.
//!
//! DESIGN
//! ======
//! The catalog is fixed at compile time; rendering only filters it. Order
//! of declaration is render order.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::session::{Role, SessionState};

/// Stable identifier of a catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavItemId {
    Home,
    ForBusiness,
    About,
    Dashboard,
    Marketplace,
    Talent,
    PostJob,
    HireTalent,
}

impl NavItemId {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::ForBusiness => "for-business",
            Self::About => "about",
            Self::Dashboard => "dashboard",
            Self::Marketplace => "marketplace",
            Self::Talent => "talent",
            Self::PostJob => "post-job",
            Self::HireTalent => "hire-talent",
        }
    }
}

/// One navigation link and the rule deciding when it shows.
#[derive(Clone, Copy, Debug)]
pub struct NavItem {
    pub id: NavItemId,
    pub label: &'static str,
    pub target: &'static str,
    pub visible_if: fn(&SessionState) -> bool,
}

impl NavItem {
    #[must_use]
    pub fn is_visible(&self, state: &SessionState) -> bool {
        (self.visible_if)(state)
    }
}

fn anonymous(state: &SessionState) -> bool {
    !state.is_authenticated()
}

fn authenticated(state: &SessionState) -> bool {
    state.is_authenticated()
}

fn job_poster(state: &SessionState) -> bool {
    state.role() == Some(Role::JobPoster)
}

fn business(state: &SessionState) -> bool {
    state.role() == Some(Role::Business)
}

/// Every link the bar can show, in render order.
pub static CATALOG: [NavItem; 8] = [
    NavItem {
        id: NavItemId::Home,
        label: "Home",
        target: "/",
        visible_if: anonymous,
    },
    NavItem {
        id: NavItemId::ForBusiness,
        label: "For Business",
        target: "/for-business",
        visible_if: anonymous,
    },
    NavItem {
        id: NavItemId::About,
        label: "About Us",
        target: "/about",
        visible_if: anonymous,
    },
    NavItem {
        id: NavItemId::Dashboard,
        label: "Dashboard",
        target: "/dashboard",
        visible_if: authenticated,
    },
    NavItem {
        id: NavItemId::Marketplace,
        label: "Marketplace",
        target: "/marketplace",
        visible_if: authenticated,
    },
    NavItem {
        id: NavItemId::Talent,
        label: "Search Talent",
        target: "/talent",
        visible_if: authenticated,
    },
    NavItem {
        id: NavItemId::PostJob,
        label: "Post Job",
        target: "/dashboard/post-job",
        visible_if: job_poster,
    },
    NavItem {
        id: NavItemId::HireTalent,
        label: "Hire Talent",
        target: "/hire-talent",
        visible_if: business,
    },
];

/// Links visible for `state`, in catalog order.
pub fn visible_items(state: &SessionState) -> Vec<&'static NavItem> {
    CATALOG.iter().filter(|item| item.is_visible(state)).collect()
}

/// Group of call-to-action controls shown next to the links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionCluster {
    /// Connect wallet, login, register.
    Anonymous,
    /// Profile, logout.
    Authenticated,
}

/// What activating a control does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Link(&'static str),
    Logout,
}

/// Visual weight of a control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    Outline,
    Primary,
}

/// A call-to-action control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionControl {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: ActionKind,
    pub emphasis: Emphasis,
}

const ANONYMOUS_ACTIONS: [ActionControl; 3] = [
    ActionControl {
        id: "connect-wallet",
        label: "Connect Wallet",
        kind: ActionKind::Link("/connect-wallet"),
        emphasis: Emphasis::Outline,
    },
    ActionControl {
        id: "login",
        label: "Login",
        kind: ActionKind::Link("/login"),
        emphasis: Emphasis::Outline,
    },
    ActionControl {
        id: "register",
        label: "Register",
        kind: ActionKind::Link("/register"),
        emphasis: Emphasis::Primary,
    },
];

const AUTHENTICATED_ACTIONS: [ActionControl; 2] = [
    ActionControl {
        id: "profile",
        label: "My Profile",
        kind: ActionKind::Link("/dashboard/profile"),
        emphasis: Emphasis::Outline,
    },
    ActionControl {
        id: "logout",
        label: "Logout",
        kind: ActionKind::Logout,
        emphasis: Emphasis::Primary,
    },
];

impl ActionCluster {
    /// Controls of this cluster in render order.
    #[must_use]
    pub fn controls(self) -> &'static [ActionControl] {
        match self {
            Self::Anonymous => &ANONYMOUS_ACTIONS,
            Self::Authenticated => &AUTHENTICATED_ACTIONS,
        }
    }
}

/// Cluster for `state`. Depends on authentication only, never on role.
pub fn action_cluster(state: &SessionState) -> ActionCluster {
    if state.is_authenticated() {
        ActionCluster::Authenticated
    } else {
        ActionCluster::Anonymous
    }
}
