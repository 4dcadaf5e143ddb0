//! Browser helpers used by the navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! `dark_mode` backs the theme toggle and `page` performs the full reload the
//! demo role switch asks for. Both are no-ops without the `hydrate` feature.

pub mod dark_mode;
pub mod page;
