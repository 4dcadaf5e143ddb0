//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared configuration from Leptos context and keep their
//! session logic in `session`, `nav`, and `state`.

pub mod navbar;
