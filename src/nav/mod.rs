//! Navigation link catalog and visibility mapping.

pub mod catalog;

pub use catalog::{
    ActionCluster, ActionControl, ActionKind, Emphasis, NavItem, NavItemId, action_cluster,
    visible_items,
};
