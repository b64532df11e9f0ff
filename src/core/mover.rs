//! # Cross-List Moves
//!
//! Relocates a top-level node (a leaf, or a whole group with its children)
//! to the end of a list. Items inside a group are not reachable from here;
//! they leave a group through `assign::ungroup`.

use log::debug;

use crate::core::node::NavNode;

/// Moves the top-level node with the given id from `from` to the end of `to`.
///
/// A leaf matches by item id, a group by group id. When nothing at the top
/// level of `from` matches, both lists come back unchanged.
pub fn move_to_end(id: &str, from: &[NavNode], to: &[NavNode]) -> (Vec<NavNode>, Vec<NavNode>) {
    let mut from = from.to_vec();
    let mut to = to.to_vec();
    if let Some(node) = take_top_level(&mut from, id) {
        to.push(node);
    }
    (from, to)
}

/// Moves the top-level node with the given id to the end of its own list.
pub fn promote_to_end(id: &str, list: &[NavNode]) -> Vec<NavNode> {
    let mut list = list.to_vec();
    if let Some(node) = take_top_level(&mut list, id) {
        list.push(node);
    }
    list
}

fn take_top_level(list: &mut Vec<NavNode>, id: &str) -> Option<NavNode> {
    match list.iter().position(|node| node.id() == id) {
        Some(index) => Some(list.remove(index)),
        None => {
            debug!("No top-level node '{}' to move", id);
            None
        }
    }
}
