//! Browser-backed stores: `document.cookie` and `window.localStorage`.
//!
//! TRADE-OFFS
//! ==========
//! Both handles are zero-sized and look up `window` on every call, so writes
//! made by other code (a login page, another tab's `localStorage` write) are
//! always visible. Outside the browser (`hydrate` off) reads are absent and
//! writes report the store as unavailable, which keeps SSR rendering the
//! anonymous bar.

use super::store::{CookieJar, KeyValueStore, StoreError};

#[cfg(feature = "hydrate")]
use super::cookie::{expire_directive, header_has_cookie};

const COOKIE_STORE: &str = "document.cookie";
const LOCAL_STORE: &str = "localStorage";

/// Cookie jar over `document.cookie`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookies;

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

impl CookieJar for BrowserCookies {
    fn has(&self, name: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            html_document()
                .and_then(|doc| doc.cookie().ok())
                .map_or(false, |header| header_has_cookie(&header, name))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
            false
        }
    }

    fn expire(&self, name: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let doc = html_document().ok_or(StoreError::Unavailable { store: COOKIE_STORE })?;
            doc.set_cookie(&expire_directive(name))
                .map_err(|e| StoreError::Rejected {
                    store: COOKIE_STORE,
                    key: name.to_owned(),
                    reason: format!("{e:?}"),
                })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
            Err(StoreError::Unavailable { store: COOKIE_STORE })
        }
    }
}

/// Key/value store over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    if storage.is_none() {
        log::debug!("localStorage not reachable");
    }
    storage.ok_or(StoreError::Unavailable { store: LOCAL_STORE })
}

#[cfg(feature = "hydrate")]
fn rejected(key: &str, err: &wasm_bindgen::JsValue) -> StoreError {
    StoreError::Rejected {
        store: LOCAL_STORE,
        key: key.to_owned(),
        reason: format!("{err:?}"),
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage().ok()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| rejected(key, &e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable { store: LOCAL_STORE })
        }
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.remove_item(key).map_err(|e| rejected(key, &e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StoreError::Unavailable { store: LOCAL_STORE })
        }
    }
}

#[cfg(all(test, not(feature = "hydrate")))]
mod tests {
    use super::*;

    #[test]
    fn server_side_reads_are_absent() {
        assert!(!BrowserCookies.has("auth_token"));
        assert_eq!(BrowserStorage.get("auth_token"), None);
    }

    #[test]
    fn server_side_writes_report_unavailable() {
        assert_eq!(
            BrowserCookies.expire("auth_token"),
            Err(StoreError::Unavailable { store: "document.cookie" })
        );
        assert_eq!(
            BrowserStorage.set("user_type", "business"),
            Err(StoreError::Unavailable { store: "localStorage" })
        );
        assert_eq!(
            BrowserStorage.remove("user_type"),
            Err(StoreError::Unavailable { store: "localStorage" })
        );
    }
}
