//! # Reordering
//!
//! Moves one element to a new index within a single sequence: a navigation
//! list, or a group's children. Membership never changes here.
//!
//! Indices outside the sequence are inert, the same as a drag released
//! outside any valid slot.

use log::debug;

use crate::core::node::{Group, NavNode};

/// Removes the node at `from` and reinserts it at `to`.
pub fn reorder(list: &[NavNode], from: usize, to: usize) -> Vec<NavNode> {
    let mut list = list.to_vec();
    move_within(&mut list, from, to);
    list
}

/// `reorder` over a group's children.
pub fn reorder_group_children(group: &Group, from: usize, to: usize) -> Group {
    let mut group = group.clone();
    move_within(&mut group.children, from, to);
    group
}

/// In-place remove-and-insert. Returns whether anything moved.
pub(crate) fn move_within<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    let len = items.len();
    if from >= len || to >= len {
        debug!("Reorder {} -> {} out of range for length {}, ignored", from, to, len);
        return false;
    }
    if from == to {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{group, leaf, leaves};

    #[test]
    fn test_move_first_to_last() {
        let list = leaves(&["calendar", "inbox", "contacts"]);
        assert_eq!(reorder(&list, 0, 2), leaves(&["inbox", "contacts", "calendar"]));
    }

    #[test]
    fn test_move_last_to_first() {
        let list = leaves(&["calendar", "inbox", "contacts"]);
        assert_eq!(reorder(&list, 2, 0), leaves(&["contacts", "calendar", "inbox"]));
    }

    #[test]
    fn test_groups_move_like_leaves() {
        let list = vec![leaf("calendar"), group("g1", &["inbox"]), leaf("leave")];
        assert_eq!(
            reorder(&list, 1, 0),
            vec![group("g1", &["inbox"]), leaf("calendar"), leaf("leave")]
        );
    }

    #[test]
    fn test_out_of_range_is_inert() {
        let list = leaves(&["calendar", "inbox"]);
        assert_eq!(reorder(&list, 2, 0), list);
        assert_eq!(reorder(&list, 0, 5), list);
        assert_eq!(reorder(&[], 0, 0), Vec::<NavNode>::new());
    }

    #[test]
    fn test_same_index_is_inert() {
        let list = leaves(&["calendar", "inbox"]);
        assert_eq!(reorder(&list, 1, 1), list);
    }

    #[test]
    fn test_reorder_is_a_permutation() {
        let list = leaves(&["a", "b", "c", "d", "e"]);
        for from in 0..list.len() {
            for to in 0..list.len() {
                let mut moved: Vec<String> =
                    reorder(&list, from, to).iter().map(|n| n.id().to_string()).collect();
                moved.sort();
                assert_eq!(moved, vec!["a", "b", "c", "d", "e"]);
            }
        }
    }

    #[test]
    fn test_reorder_group_children_keeps_metadata() {
        let g = Group::new("g1", "Work", "Briefcase").with_children(["a", "b", "c"]);
        let moved = reorder_group_children(&g, 2, 0);
        assert_eq!(moved.children, vec!["c", "a", "b"]);
        assert_eq!(moved.id, "g1");
        assert_eq!(moved.name, "Work");
        assert_eq!(moved.icon, "Briefcase");
        assert_eq!(reorder_group_children(&g, 0, 3), g);
    }
}
