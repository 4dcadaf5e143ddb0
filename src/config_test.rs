use super::*;

#[test]
fn defaults_match_login_flow_keys() {
    let config = NavConfig::default();
    assert_eq!(config.auth_cookie, "auth_token");
    assert_eq!(config.auth_key, "auth_token");
    assert_eq!(config.role_key, "user_type");
    assert_eq!(config.home_route, "/");
}

#[test]
fn demo_switch_defaults_to_debug_builds_only() {
    assert_eq!(NavConfig::default().demo_role_switch, cfg!(debug_assertions));
}

#[test]
fn from_json_fills_missing_fields_with_defaults() {
    let config =
        NavConfig::from_json(r#"{"home_route": "/welcome", "demo_role_switch": false}"#).unwrap();
    assert_eq!(config.home_route, "/welcome");
    assert!(!config.demo_role_switch);
    assert_eq!(config.auth_cookie, "auth_token");
    assert_eq!(config.role_key, "user_type");
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(NavConfig::from_json("{}").unwrap(), NavConfig::default());
}

#[test]
fn from_json_rejects_wrong_types() {
    assert!(NavConfig::from_json(r#"{"demo_role_switch": "yes"}"#).is_err());
    assert!(NavConfig::from_json("[]").is_err());
}

#[test]
fn with_demo_role_switch_overrides_flag() {
    assert!(NavConfig::default().with_demo_role_switch(true).demo_role_switch);
    assert!(!NavConfig::default().with_demo_role_switch(false).demo_role_switch);
}
