//! # Layout State
//!
//! The `Settings` aggregate: both navigation lists plus the visibility map.
//! This module contains domain logic only - no persistence, no rendering.
//!
//! ```text
//! Settings
//! ├── top_nav_order: Vec<NavNode>        // "topNavOrder"
//! ├── bottom_nav_order: Vec<NavNode>     // "bottomNavOrder"
//! ├── sidebar_visibility: VisibilityMap  // "sidebarVisibility"
//! └── other: Map<String, Value>          // font size, language, ... passed through
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! The helpers here are lookups, plus the repair passes run once on load.

use std::collections::HashSet;
use std::fmt;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::ListSide;
use crate::core::groups::{MAX_GROUP_NAME_CHARS, new_group_id, repair_name};
use crate::core::node::{Group, NavNode};
use crate::core::registry::NavRegistry;
use crate::core::visibility::{PROTECTED_ITEM, VisibilityMap};

/// Both sides in search order: top first, then bottom.
pub const SIDES: [ListSide; 2] = [ListSide::Top, ListSide::Bottom];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub top_nav_order: Vec<NavNode>,
    #[serde(default)]
    pub bottom_nav_order: Vec<NavNode>,
    #[serde(default)]
    pub sidebar_visibility: VisibilityMap,
    /// Fields owned by other settings screens, preserved verbatim.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

/// A broken invariant found in a loaded snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    DuplicateItem(String),
    DuplicateGroupId(String),
    ProtectedHidden(String),
    InvalidGroupName(String),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::DuplicateItem(id) => write!(f, "item '{id}' appears more than once"),
            Violation::DuplicateGroupId(id) => write!(f, "group id '{id}' is used more than once"),
            Violation::ProtectedHidden(id) => write!(f, "protected item '{id}' is marked hidden"),
            Violation::InvalidGroupName(id) => write!(
                f,
                "group '{id}' needs a name of 1 to {MAX_GROUP_NAME_CHARS} characters without surrounding spaces"
            ),
        }
    }
}

impl Settings {
    pub fn new(top_nav_order: Vec<NavNode>, bottom_nav_order: Vec<NavNode>) -> Self {
        Self {
            top_nav_order,
            bottom_nav_order,
            ..Default::default()
        }
    }

    pub fn list(&self, side: ListSide) -> &Vec<NavNode> {
        match side {
            ListSide::Top => &self.top_nav_order,
            ListSide::Bottom => &self.bottom_nav_order,
        }
    }

    pub fn list_mut(&mut self, side: ListSide) -> &mut Vec<NavNode> {
        match side {
            ListSide::Top => &mut self.top_nav_order,
            ListSide::Bottom => &mut self.bottom_nav_order,
        }
    }

    /// Finds a group by id, searching top then bottom.
    pub fn find_group(&self, group_id: &str) -> Option<(ListSide, usize)> {
        SIDES.into_iter().find_map(|side| {
            self.list(side)
                .iter()
                .position(|node| matches!(node, NavNode::Group(g) if g.id == group_id))
                .map(|index| (side, index))
        })
    }

    pub fn group(&self, group_id: &str) -> Option<&Group> {
        let (side, index) = self.find_group(group_id)?;
        self.list(side)[index].as_group()
    }

    pub fn group_mut(&mut self, group_id: &str) -> Option<&mut Group> {
        let (side, index) = self.find_group(group_id)?;
        self.list_mut(side)[index].as_group_mut()
    }

    /// Every placed item id, in top-then-bottom, depth-first order.
    /// Duplicates are yielded as many times as they occur.
    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        SIDES.into_iter().flat_map(move |side| {
            self.list(side)
                .iter()
                .flat_map(NavNode::item_ids)
                .map(String::as_str)
        })
    }

    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        SIDES
            .into_iter()
            .flat_map(move |side| self.list(side).iter().filter_map(NavNode::as_group))
    }

    pub fn is_visible(&self, item: &str) -> bool {
        self.sidebar_visibility.is_visible(item)
    }

    /// Reports every broken invariant. Empty means the snapshot is sound.
    pub fn violations(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for id in self.item_ids() {
            if !seen.insert(id) && reported.insert(id) {
                violations.push(Violation::DuplicateItem(id.to_string()));
            }
        }

        let mut seen_groups = HashSet::new();
        let mut reported_groups = HashSet::new();
        for group in self.groups() {
            if !seen_groups.insert(group.id.as_str()) && reported_groups.insert(group.id.as_str()) {
                violations.push(Violation::DuplicateGroupId(group.id.clone()));
            }
        }
        for group in self.groups() {
            if repair_name(&group.name) != group.name {
                violations.push(Violation::InvalidGroupName(group.id.clone()));
            }
        }

        if self.sidebar_visibility.stored(PROTECTED_ITEM) == Some(false) {
            violations.push(Violation::ProtectedHidden(PROTECTED_ITEM.to_string()));
        }

        violations
    }

    /// Repairs a snapshot that breaks the invariants, e.g. one edited by hand.
    ///
    /// The first occurrence of an item (top then bottom, depth-first) is kept
    /// and later ones dropped. A repeated group id is replaced with a fresh one,
    /// and a group name outside the allowed length is trimmed or filled in.
    /// A stored `false` for the protected item is cleared.
    ///
    /// Returns whether anything changed.
    pub fn normalize(&mut self) -> bool {
        let mut changed = false;
        let mut seen_items: HashSet<String> = HashSet::new();
        let mut seen_groups: HashSet<String> = HashSet::new();

        for side in SIDES {
            let nodes = std::mem::take(self.list_mut(side));
            let mut kept = Vec::with_capacity(nodes.len());

            for node in nodes {
                match node {
                    NavNode::Leaf(id) => {
                        if seen_items.insert(id.clone()) {
                            kept.push(NavNode::Leaf(id));
                        } else {
                            warn!("Dropping duplicate item '{}' from {} list", id, side.label());
                            changed = true;
                        }
                    }
                    NavNode::Group(mut group) => {
                        if !seen_groups.insert(group.id.clone()) {
                            let fresh = new_group_id();
                            warn!("Group id '{}' repeated, reassigned to '{}'", group.id, fresh);
                            seen_groups.insert(fresh.clone());
                            group.id = fresh;
                            changed = true;
                        }

                        let name = repair_name(&group.name);
                        if name != group.name {
                            warn!("Group '{}' had an invalid name '{}', renamed to '{}'", group.id, group.name, name);
                            group.name = name;
                            changed = true;
                        }

                        let before = group.children.len();
                        group.children.retain(|child| {
                            let first = seen_items.insert(child.clone());
                            if !first {
                                warn!("Dropping duplicate item '{}' from group '{}'", child, group.name);
                            }
                            first
                        });
                        changed |= group.children.len() != before;

                        kept.push(NavNode::Group(group));
                    }
                }
            }

            *self.list_mut(side) = kept;
        }

        if self.sidebar_visibility.clear_protected_override() {
            warn!("Protected item '{}' was stored as hidden, restored", PROTECTED_ITEM);
            changed = true;
        }

        changed
    }

    /// Places every registered item that is missing from the layout, appending
    /// it to its default side. Ids in the layout the registry doesn't know are
    /// left alone. A registry id listed twice is placed once, and one that
    /// clashes with a group id is skipped.
    ///
    /// Returns how many items were added.
    pub fn reconcile(&mut self, registry: &dyn NavRegistry) -> usize {
        let mut placed: HashSet<String> = self.item_ids().map(str::to_string).collect();
        let mut added = 0;

        for item in registry.items() {
            if placed.contains(&item.id) {
                continue;
            }
            if self.find_group(&item.id).is_some() {
                warn!("Registered item '{}' has the same id as a group, not placed", item.id);
                continue;
            }
            info!("Placing new item '{}' in {} list", item.id, item.side.label());
            self.list_mut(item.side).push(NavNode::leaf(item.id.clone()));
            placed.insert(item.id.clone());
            added += 1;
        }

        added
    }
}
