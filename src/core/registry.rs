//! # Navigation Registry
//!
//! Static metadata (title, icon) for every navigation item the dashboard
//! ships. The layout engine only stores ids; anything that wants a label asks
//! the registry, and must cope with a miss since stored layouts can outlive
//! the items they mention.

use serde::{Deserialize, Serialize};

use crate::ListSide;
use crate::core::node::ItemId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: ItemId,
    pub title: String,
    pub icon: String,
    /// List a newly discovered item is placed in.
    #[serde(default)]
    pub side: ListSide,
}

impl NavItem {
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: icon.into(),
            side: ListSide::Top,
        }
    }

    pub fn on(mut self, side: ListSide) -> Self {
        self.side = side;
        self
    }
}

/// Read-only lookup of item metadata.
pub trait NavRegistry {
    fn lookup(&self, id: &str) -> Option<&NavItem>;

    /// All items, in their default order.
    fn items(&self) -> &[NavItem];

    /// Display title, falling back to the raw id for unknown items.
    fn title<'a>(&'a self, id: &'a str) -> &'a str {
        self.lookup(id).map(|item| item.title.as_str()).unwrap_or(id)
    }
}

/// A fixed list of items, either the built-in dashboard set or one loaded from config.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    items: Vec<NavItem>,
}

impl StaticRegistry {
    pub fn new(items: Vec<NavItem>) -> Self {
        Self { items }
    }

    /// The dashboard's own screens.
    pub fn builtin() -> Self {
        Self::new(vec![
            NavItem::new("calendar", "Calendar", "Calendar"),
            NavItem::new("inbox", "Inbox", "Inbox"),
            NavItem::new("contacts", "Contacts", "Users"),
            NavItem::new("time-tracking", "Time Tracking", "Clock"),
            NavItem::new("leave", "Leave", "Plane"),
            NavItem::new("settings", "Settings", "Settings").on(ListSide::Bottom),
        ])
    }
}

impl NavRegistry for StaticRegistry {
    fn lookup(&self, id: &str) -> Option<&NavItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn items(&self) -> &[NavItem] {
        &self.items
    }
}
