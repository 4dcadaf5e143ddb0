//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in plain structs so it can be tested without a reactive
//! runtime; components wrap it in `RwSignal`s.

pub mod nav;
