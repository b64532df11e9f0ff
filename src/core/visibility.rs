//! # Sidebar Visibility
//!
//! Per-item show/hide flags. Absent entries mean "visible". The settings
//! entry itself can never be hidden, otherwise the user could lock
//! themselves out of the screen that turns items back on.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::action::Rejection;
use crate::core::node::ItemId;

/// The one item whose visibility is pinned to `true`.
pub const PROTECTED_ITEM: &str = "settings";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisibilityMap(BTreeMap<ItemId, bool>);

impl VisibilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored flag, defaulting to visible. The protected item is always visible.
    pub fn is_visible(&self, item: &str) -> bool {
        item == PROTECTED_ITEM || self.0.get(item).copied().unwrap_or(true)
    }

    /// Records a flag. Hiding the protected item is rejected and leaves the map untouched.
    pub fn set_visible(&mut self, item: &str, visible: bool) -> Result<(), Rejection> {
        if item == PROTECTED_ITEM && !visible {
            return Err(Rejection::ProtectedItem(item.to_string()));
        }
        self.0.insert(item.to_string(), visible);
        Ok(())
    }

    /// The raw stored flag, if any.
    pub fn stored(&self, item: &str) -> Option<bool> {
        self.0.get(item).copied()
    }

    /// Items explicitly hidden.
    pub fn hidden(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, visible)| !**visible)
            .map(|(id, _)| id.as_str())
    }

    /// Drops a stored `false` for the protected item. Returns whether one was present.
    pub(crate) fn clear_protected_override(&mut self) -> bool {
        if self.0.get(PROTECTED_ITEM) == Some(&false) {
            self.0.remove(PROTECTED_ITEM);
            return true;
        }
        false
    }

    /// Writes a flag bypassing the protected-item check, to simulate bad stored data.
    #[cfg(test)]
    pub(crate) fn force(&mut self, item: &str, visible: bool) {
        self.0.insert(item.to_string(), visible);
    }
}
