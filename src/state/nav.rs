//! Render-pass state of the navigation bar.
//!
//! DESIGN
//! ======
//! The session is replaced wholesale with each fresh resolution; nothing in
//! here derives or patches it. The collapsible menu flag only shares the
//! visible-item sequence with the session.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::nav::{ActionCluster, NavItem, action_cluster, visible_items};
use crate::session::{SessionEffect, SessionState};

/// Navigation bar state held in a `RwSignal` by the `NavBar` component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub session: SessionState,
    pub pathname: String,
    pub menu_expanded: bool,
}

impl NavState {
    /// State for the first render.
    ///
    /// The component seeds this with [`SessionState::Anonymous`] so hydration
    /// matches the server markup, then resolves fresh in its route effect.
    pub fn mounted(pathname: impl Into<String>, session: SessionState) -> Self {
        Self {
            session,
            pathname: pathname.into(),
            menu_expanded: false,
        }
    }

    /// Record a route change and the resolution it triggered.
    pub fn observe_route(&mut self, pathname: &str, session: SessionState) {
        pathname.clone_into(&mut self.pathname);
        self.session = session;
    }

    /// Apply a mutator's follow-up. Returns the route to navigate to, if any.
    ///
    /// A full reload leaves state untouched; the page is about to be torn
    /// down.
    pub fn apply(&mut self, effect: &SessionEffect) -> Option<String> {
        match effect {
            SessionEffect::Refresh { state, redirect } => {
                self.session = *state;
                redirect.clone()
            }
            SessionEffect::FullReload => None,
        }
    }

    /// Handle activation of any link or control in either cluster.
    ///
    /// Collapses the menu, then applies the control's session effect if it
    /// has one. Returns the route to navigate to, if any.
    pub fn activate(&mut self, effect: Option<&SessionEffect>) -> Option<String> {
        self.collapse_menu();
        effect.and_then(|effect| self.apply(effect))
    }

    pub fn toggle_menu(&mut self) {
        self.menu_expanded = !self.menu_expanded;
    }

    pub fn collapse_menu(&mut self) {
        self.menu_expanded = false;
    }

    pub fn visible_items(&self) -> Vec<&'static NavItem> {
        visible_items(&self.session)
    }

    pub fn action_cluster(&self) -> ActionCluster {
        action_cluster(&self.session)
    }

    /// Whether `item` points at the current route.
    pub fn is_active(&self, item: &NavItem) -> bool {
        self.pathname == item.target
    }
}
