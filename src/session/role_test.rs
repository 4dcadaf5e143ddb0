use super::*;

// =============================================================
// Parsing
// =============================================================

#[test]
fn parses_every_storage_tag() {
    assert_eq!("freelancer".parse::<Role>(), Ok(Role::Freelancer));
    assert_eq!("business".parse::<Role>(), Ok(Role::Business));
    assert_eq!("job-poster".parse::<Role>(), Ok(Role::JobPoster));
}

#[test]
fn rejects_unknown_and_differently_cased_tags() {
    assert_eq!("admin".parse::<Role>(), Err(UnknownRole("admin".to_owned())));
    assert!("Business".parse::<Role>().is_err());
    assert!("job_poster".parse::<Role>().is_err());
    assert!("".parse::<Role>().is_err());
}

#[test]
fn unknown_role_message_names_the_value() {
    let err = "admin".parse::<Role>().unwrap_err();
    assert_eq!(err.to_string(), "unknown role tag: \"admin\"");
}

#[test]
fn as_str_is_the_inverse_of_parse() {
    for role in Role::ALL {
        assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        assert_eq!(role.to_string(), role.as_str());
    }
}

// =============================================================
// Defaults and labels
// =============================================================

#[test]
fn default_role_is_freelancer() {
    assert_eq!(Role::default(), Role::Freelancer);
}

#[test]
fn labels_match_demo_selector_text() {
    let labels: Vec<_> = Role::ALL.iter().map(|r| r.label()).collect();
    assert_eq!(labels, ["Freelancer", "Business", "Job Poster"]);
}

#[test]
fn serde_uses_storage_tags() {
    assert_eq!(serde_json::to_string(&Role::JobPoster).unwrap(), "\"job-poster\"");
    let role: Role = serde_json::from_str("\"business\"").unwrap();
    assert_eq!(role, Role::Business);
}
