use super::*;

// =============================================================
// Helpers
// =============================================================

fn ids(state: SessionState) -> Vec<&'static str> {
    visible_items(&state).iter().map(|item| item.id.as_str()).collect()
}

const ALL_STATES: [SessionState; 4] = [
    SessionState::Anonymous,
    SessionState::Authenticated(Role::Freelancer),
    SessionState::Authenticated(Role::Business),
    SessionState::Authenticated(Role::JobPoster),
];

// =============================================================
// visible_items
// =============================================================

#[test]
fn anonymous_sees_marketing_links() {
    assert_eq!(ids(SessionState::Anonymous), ["home", "for-business", "about"]);
}

#[test]
fn freelancer_sees_no_role_gated_links() {
    assert_eq!(
        ids(SessionState::Authenticated(Role::Freelancer)),
        ["dashboard", "marketplace", "talent"]
    );
}

#[test]
fn business_sees_hire_talent() {
    assert_eq!(
        ids(SessionState::Authenticated(Role::Business)),
        ["dashboard", "marketplace", "talent", "hire-talent"]
    );
}

#[test]
fn job_poster_sees_post_job() {
    assert_eq!(
        ids(SessionState::Authenticated(Role::JobPoster)),
        ["dashboard", "marketplace", "talent", "post-job"]
    );
}

#[test]
fn visible_items_preserve_catalog_order() {
    for state in ALL_STATES {
        let positions: Vec<usize> = visible_items(&state)
            .iter()
            .map(|item| CATALOG.iter().position(|c| c.id == item.id).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }
}

// =============================================================
// Catalog
// =============================================================

#[test]
fn catalog_labels_and_targets() {
    let rows: Vec<_> = CATALOG
        .iter()
        .map(|item| (item.id.as_str(), item.label, item.target))
        .collect();
    assert_eq!(
        rows,
        [
            ("home", "Home", "/"),
            ("for-business", "For Business", "/for-business"),
            ("about", "About Us", "/about"),
            ("dashboard", "Dashboard", "/dashboard"),
            ("marketplace", "Marketplace", "/marketplace"),
            ("talent", "Search Talent", "/talent"),
            ("post-job", "Post Job", "/dashboard/post-job"),
            ("hire-talent", "Hire Talent", "/hire-talent"),
        ]
    );
}

#[test]
fn catalog_ids_are_unique() {
    for (i, a) in CATALOG.iter().enumerate() {
        for b in &CATALOG[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

// =============================================================
// action_cluster
// =============================================================

#[test]
fn action_cluster_follows_authentication_only() {
    assert_eq!(action_cluster(&SessionState::Anonymous), ActionCluster::Anonymous);
    for role in Role::ALL {
        assert_eq!(
            action_cluster(&SessionState::Authenticated(role)),
            ActionCluster::Authenticated
        );
    }
}

#[test]
fn anonymous_cluster_controls() {
    let controls: Vec<_> = ActionCluster::Anonymous
        .controls()
        .iter()
        .map(|c| (c.id, c.kind))
        .collect();
    assert_eq!(
        controls,
        [
            ("connect-wallet", ActionKind::Link("/connect-wallet")),
            ("login", ActionKind::Link("/login")),
            ("register", ActionKind::Link("/register")),
        ]
    );
}

#[test]
fn authenticated_cluster_controls() {
    let controls = ActionCluster::Authenticated.controls();
    assert_eq!(controls.len(), 2);
    assert_eq!(controls[0].label, "My Profile");
    assert_eq!(controls[0].kind, ActionKind::Link("/dashboard/profile"));
    assert_eq!(controls[1].label, "Logout");
    assert_eq!(controls[1].kind, ActionKind::Logout);
    assert_eq!(controls[1].emphasis, Emphasis::Primary);
}
