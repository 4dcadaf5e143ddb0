use super::*;

#[test]
fn finds_cookie_among_others() {
    assert!(header_has_cookie("theme=dark; auth_token=abc; lang=en", "auth_token"));
    assert!(header_has_cookie("auth_token=abc", "auth_token"));
}

#[test]
fn finds_cookie_with_empty_value() {
    assert!(header_has_cookie("auth_token=", "auth_token"));
    assert!(header_has_cookie("auth_token", "auth_token"));
}

#[test]
fn ignores_names_that_only_contain_the_key() {
    assert!(!header_has_cookie("auth_token_legacy=1", "auth_token"));
    assert!(!header_has_cookie("old_auth_token=1", "auth_token"));
    assert!(!header_has_cookie("session=auth_token", "auth_token"));
}

#[test]
fn empty_header_or_name_has_nothing() {
    assert!(!header_has_cookie("", "auth_token"));
    assert!(!header_has_cookie("auth_token=1", ""));
}

#[test]
fn expire_directive_clears_site_wide() {
    assert_eq!(expire_directive("auth_token"), "auth_token=; path=/; max-age=0");
}
