//! `document.cookie` string helpers.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Whether the `document.cookie` header string carries a cookie named `name`.
///
/// Matches on the cookie name only; `auth_token_legacy=1` or a value that
/// merely contains `auth_token` do not count.
pub fn header_has_cookie(header: &str, name: &str) -> bool {
    !name.is_empty()
        && header
            .split(';')
            .filter_map(|pair| pair.split('=').next())
            .any(|key| key.trim() == name)
}

/// Assignment string that expires `name` for the whole site.
pub fn expire_directive(name: &str) -> String {
    format!("{name}=; path=/; max-age=0")
}
