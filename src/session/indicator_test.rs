use super::*;
use crate::session::store::{MemoryCookies, MemoryStorage};

// =============================================================
// Helpers
// =============================================================

struct Fixed(bool);

impl SessionIndicator for Fixed {
    fn source(&self) -> &'static str {
        "fixed"
    }

    fn is_present(&self) -> bool {
        self.0
    }
}

// =============================================================
// any_present
// =============================================================

#[test]
fn any_present_truth_table() {
    assert!(!any_present(&[&Fixed(false), &Fixed(false)]));
    assert!(any_present(&[&Fixed(true), &Fixed(false)]));
    assert!(any_present(&[&Fixed(false), &Fixed(true)]));
    assert!(any_present(&[&Fixed(true), &Fixed(true)]));
}

#[test]
fn any_present_empty_is_false() {
    assert!(!any_present(&[]));
}

// =============================================================
// CookieIndicator
// =============================================================

#[test]
fn cookie_indicator_tracks_jar() {
    let jar = MemoryCookies::default();
    let indicator = CookieIndicator::new(&jar, "auth_token");
    assert_eq!(indicator.source(), "cookie");
    assert!(!indicator.is_present());

    jar.insert("auth_token");
    assert!(indicator.is_present());
}

#[test]
fn cookie_indicator_ignores_other_cookies() {
    let jar = MemoryCookies::default();
    jar.insert("theme");
    assert!(!CookieIndicator::new(&jar, "auth_token").is_present());
}

// =============================================================
// StorageIndicator
// =============================================================

#[test]
fn storage_indicator_requires_exact_true() {
    let store = MemoryStorage::default();
    let indicator = StorageIndicator::new(&store, "auth_token");
    assert_eq!(indicator.source(), "fallback store");
    assert!(!indicator.is_present());

    for value in ["false", "TRUE", "1", "", " true"] {
        store.seed("auth_token", value);
        assert!(!indicator.is_present(), "value {value:?} should not count");
    }

    store.seed("auth_token", "true");
    assert!(indicator.is_present());
}
