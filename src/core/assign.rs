//! # Group Membership
//!
//! Moving leaves into and out of groups. An item occupies exactly one slot
//! across both lists, so dropping it into a group first clears every other
//! place it could be.

use log::{debug, warn};

use crate::core::node::NavNode;
use crate::core::state::{SIDES, Settings};

/// Makes `item` the last child of the group `group_id`.
///
/// The target is resolved before anything is removed: when the group does
/// not exist, the item stays where it is.
pub fn drop_into_group(settings: &Settings, item: &str, group_id: &str) -> Settings {
    let Some(target) = settings.group(group_id) else {
        warn!("Drop of '{}' into unknown group '{}' ignored", item, group_id);
        return settings.clone();
    };
    if target.contains(item) {
        debug!("'{}' already in group '{}'", item, group_id);
        return settings.clone();
    }
    if settings.find_group(item).is_some() {
        warn!("Group '{}' cannot be nested into '{}'", item, group_id);
        return settings.clone();
    }

    let mut next = settings.clone();
    remove_everywhere(&mut next, item);
    if let Some(group) = next.group_mut(group_id) {
        group.children.push(item.to_string());
    }
    next
}

/// Takes `item` out of the group and appends it as a leaf to the list holding that group.
pub fn ungroup(settings: &Settings, group_id: &str, item: &str) -> Settings {
    let mut next = settings.clone();
    let Some((side, index)) = next.find_group(group_id) else {
        warn!("Ungroup from unknown group '{}' ignored", group_id);
        return next;
    };

    let list = next.list_mut(side);
    let Some(group) = list[index].as_group_mut() else {
        return next;
    };
    let Some(child_index) = group.children.iter().position(|c| c == item) else {
        debug!("'{}' is not in group '{}'", item, group_id);
        return next;
    };
    group.children.remove(child_index);
    list.push(NavNode::leaf(item));
    next
}

/// Removes every leaf occurrence of `item`: top level of both lists and all group children.
fn remove_everywhere(settings: &mut Settings, item: &str) {
    for side in SIDES {
        let list = settings.list_mut(side);
        list.retain(|node| !node.is_leaf(item));
        for node in list.iter_mut() {
            if let NavNode::Group(group) = node {
                group.children.retain(|child| child != item);
            }
        }
    }
}
