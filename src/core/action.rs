//! # Actions
//!
//! Everything that can happen to the navigation layout becomes an `Action`.
//! User drags "inbox" onto the bottom list? That's `Action::MoveBetweenLists`.
//! User drops it onto a group? That's `Action::DropIntoGroup`.
//!
//! The `update()` function takes the current state and an action,
//! then returns the new state. No side effects here. Saving happens elsewhere.
//!
//! ```text
//! Settings + Action  →  update()  →  Ok(New Settings) | Err(Rejection)
//! ```
//!
//! Updates are all-or-nothing: the input snapshot is never touched, so a
//! rejected action (or a drag the UI never commits) leaves nothing behind.
//! References to ids that no longer exist are not errors; they return the
//! state unchanged.

use log::debug;
use thiserror::Error;

use crate::ListSide;
use crate::core::assign::{drop_into_group, ungroup};
use crate::core::groups::{self, create_group, delete_group, edit_group};
use crate::core::mover::{move_to_end, promote_to_end};
use crate::core::node::{GroupId, ItemId};
use crate::core::reorder::{reorder, reorder_group_children};
use crate::core::state::Settings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move the node at `from` to `to` within one list.
    Reorder { side: ListSide, from: usize, to: usize },
    /// Move the child at `from` to `to` within one group.
    ReorderGroupChildren {
        group_id: GroupId,
        from: usize,
        to: usize,
    },
    /// Move a top-level leaf or group to the end of a list.
    /// With `from == to` this promotes the node to the end of its own list.
    MoveBetweenLists {
        id: String,
        from: ListSide,
        to: ListSide,
    },
    CreateGroup {
        name: String,
        icon: String,
        side: ListSide,
    },
    EditGroup {
        group_id: GroupId,
        name: String,
        icon: String,
    },
    /// Remove a group; its children become leaves at the end of the same list.
    DeleteGroup { group_id: GroupId },
    DropIntoGroup { item: ItemId, group_id: GroupId },
    Ungroup { group_id: GroupId, item: ItemId },
    SetVisible { item: ItemId, visible: bool },
}

/// Why an action was refused. The message is meant for the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("group name required")]
    GroupNameRequired,
    #[error("group name must be at most {max} characters")]
    GroupNameTooLong { max: usize },
    #[error("cannot hide this item ('{0}')")]
    ProtectedItem(String),
}

/// Applies an action to a snapshot, producing the next snapshot.
pub fn update(state: &Settings, action: Action) -> Result<Settings, Rejection> {
    debug!("Applying {:?}", action);

    match action {
        Action::Reorder { side, from, to } => {
            let mut next = state.clone();
            *next.list_mut(side) = reorder(state.list(side), from, to);
            Ok(next)
        }
        Action::ReorderGroupChildren { group_id, from, to } => {
            let mut next = state.clone();
            match next.group_mut(&group_id) {
                Some(group) => *group = reorder_group_children(group, from, to),
                None => debug!("Reorder in unknown group '{}' ignored", group_id),
            }
            Ok(next)
        }
        Action::MoveBetweenLists { id, from, to } => {
            let mut next = state.clone();
            if from == to {
                *next.list_mut(from) = promote_to_end(&id, state.list(from));
            } else {
                let (new_from, new_to) = move_to_end(&id, state.list(from), state.list(to));
                *next.list_mut(from) = new_from;
                *next.list_mut(to) = new_to;
            }
            Ok(next)
        }
        Action::CreateGroup { name, icon, side } => {
            let id = groups::fresh_group_id(state);
            let mut next = state.clone();
            *next.list_mut(side) = create_group(&name, &icon, id, state.list(side))?;
            Ok(next)
        }
        Action::EditGroup {
            group_id,
            name,
            icon,
        } => edit_group(state, &group_id, &name, &icon),
        Action::DeleteGroup { group_id } => Ok(delete_group(state, &group_id)),
        Action::DropIntoGroup { item, group_id } => Ok(drop_into_group(state, &item, &group_id)),
        Action::Ungroup { group_id, item } => Ok(ungroup(state, &group_id, &item)),
        Action::SetVisible { item, visible } => {
            let mut next = state.clone();
            next.sidebar_visibility.set_visible(&item, visible)?;
            Ok(next)
        }
    }
}
