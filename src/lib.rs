//! # nexawork-nav
//!
//! Leptos + WASM navigation bar for the NexaWork marketplace.
//!
//! The bar decides which links and call-to-action controls to show from a
//! client-local session state: anonymous, or authenticated with a role tag
//! (freelancer, business, job poster). Session evidence is read from a cookie
//! and a `localStorage` fallback; no authentication happens here.
//!
//! `session` derives and mutates that state, `nav` maps it onto the static
//! link catalog, `state` holds the per-render bar state, and `components`
//! renders it.

pub mod app;
pub mod components;
pub mod config;
pub mod nav;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
