//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::node::{Group, NavNode};
use crate::core::state::Settings;

pub fn leaf(id: &str) -> NavNode {
    NavNode::leaf(id)
}

pub fn leaves(ids: &[&str]) -> Vec<NavNode> {
    ids.iter().map(|id| leaf(id)).collect()
}

/// A group named after its id, with a folder icon.
pub fn group(id: &str, children: &[&str]) -> NavNode {
    Group::new(id, id, "Folder")
        .with_children(children.iter().copied())
        .into()
}

pub fn settings(top: Vec<NavNode>, bottom: Vec<NavNode>) -> Settings {
    Settings::new(top, bottom)
}
