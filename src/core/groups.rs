//! # Group Management
//!
//! Creating, renaming and deleting groups. Deleting a group never loses
//! items: its children are promoted to top-level leaves at the end of the
//! list the group was in.

use log::{debug, warn};

use crate::core::action::Rejection;
use crate::core::node::{Group, GroupId, NavNode};
use crate::core::state::Settings;

/// Longest allowed group name, in characters.
pub const MAX_GROUP_NAME_CHARS: usize = 20;

/// Icon used when a group is saved without one.
pub const DEFAULT_GROUP_ICON: &str = "Folder";

/// Name given to a stored group whose name was blank.
pub const DEFAULT_GROUP_NAME: &str = "Group";

/// Generate a new group id.
pub fn new_group_id() -> GroupId {
    format!("group-{}", uuid::Uuid::new_v4())
}

/// Generate a group id no group in `settings` already uses.
pub fn fresh_group_id(settings: &Settings) -> GroupId {
    loop {
        let id = new_group_id();
        if settings.find_group(&id).is_none() {
            return id;
        }
    }
}

/// Trims and checks a group name, returning the name to store.
pub fn validate_name(name: &str) -> Result<String, Rejection> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Rejection::GroupNameRequired);
    }
    if name.chars().count() > MAX_GROUP_NAME_CHARS {
        return Err(Rejection::GroupNameTooLong {
            max: MAX_GROUP_NAME_CHARS,
        });
    }
    Ok(name.to_string())
}

/// Coerces a stored name into the allowed form: trimmed, cut to
/// `MAX_GROUP_NAME_CHARS`, and never empty. A valid name comes back unchanged.
pub fn repair_name(name: &str) -> String {
    let cut: String = name.trim().chars().take(MAX_GROUP_NAME_CHARS).collect();
    let cut = cut.trim_end();
    if cut.is_empty() {
        DEFAULT_GROUP_NAME.to_string()
    } else {
        cut.to_string()
    }
}

fn icon_or_default(icon: &str) -> String {
    let icon = icon.trim();
    if icon.is_empty() {
        DEFAULT_GROUP_ICON.to_string()
    } else {
        icon.to_string()
    }
}

/// Appends a new empty group to the end of `list`.
pub fn create_group(
    name: &str,
    icon: &str,
    id: GroupId,
    list: &[NavNode],
) -> Result<Vec<NavNode>, Rejection> {
    let name = validate_name(name)?;
    let mut list = list.to_vec();
    list.push(NavNode::Group(Group::new(id, name, icon_or_default(icon))));
    Ok(list)
}

/// Replaces a group's name and icon in place. A missing group leaves the state as is.
pub fn edit_group(
    settings: &Settings,
    group_id: &str,
    name: &str,
    icon: &str,
) -> Result<Settings, Rejection> {
    let name = validate_name(name)?;
    let mut next = settings.clone();
    match next.group_mut(group_id) {
        Some(group) => {
            group.name = name;
            group.icon = icon_or_default(icon);
        }
        None => warn!("Edit of unknown group '{}' ignored", group_id),
    }
    Ok(next)
}

/// Removes a group, appending its children to the end of the same list.
pub fn delete_group(settings: &Settings, group_id: &str) -> Settings {
    let mut next = settings.clone();
    let Some((side, index)) = next.find_group(group_id) else {
        warn!("Delete of unknown group '{}' ignored", group_id);
        return next;
    };

    let list = next.list_mut(side);
    if let NavNode::Group(group) = list.remove(index) {
        debug!(
            "Deleted group '{}', promoting {} children to {} list",
            group.name,
            group.children.len(),
            side.label()
        );
        list.extend(group.children.into_iter().map(NavNode::Leaf));
    }
    next
}
