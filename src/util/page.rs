//! Whole-page browser primitives.

/// Reload the current document, discarding all in-memory state.
///
/// Used only for the demo role switch, which needs the whole view to re-read
/// storage from scratch.
pub fn reload() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                leptos::logging::warn!("page reload failed: {e:?}");
            }
        }
    }
}
