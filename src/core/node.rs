//! # Navigation Nodes
//!
//! A navigation list is a sequence of `NavNode`s. Each node is either a bare
//! reference to a registered item, or a user-created group holding its own
//! ordered list of item references.
//!
//! ```text
//! NavNode
//! ├── Leaf("calendar")
//! └── Group { id, name, icon, children: ["inbox", "contacts"] }
//! ```
//!
//! On the wire a leaf is a bare JSON string and a group is an object tagged
//! with `"type": "group"`. The shape is discriminated once, here, via
//! `RawNode`; the rest of the crate only ever sees the enum.

use serde::{Deserialize, Serialize};

/// Identifier of a statically registered navigation item.
pub type ItemId = String;

/// Identifier of a user-created group.
pub type GroupId = String;

/// The `type` tag carried by serialized groups.
const GROUP_TAG: &str = "group";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNode", into = "RawNode")]
pub enum NavNode {
    Leaf(ItemId),
    Group(Group),
}

/// A named container of leaves. Children are item ids only, so groups never nest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub icon: String,
    pub children: Vec<ItemId>,
}

impl NavNode {
    pub fn leaf(id: impl Into<ItemId>) -> Self {
        NavNode::Leaf(id.into())
    }

    /// Item id for a leaf, group id for a group.
    pub fn id(&self) -> &str {
        match self {
            NavNode::Leaf(id) => id,
            NavNode::Group(group) => &group.id,
        }
    }

    pub fn is_leaf(&self, item: &str) -> bool {
        matches!(self, NavNode::Leaf(id) if id == item)
    }

    /// The item ids this node places: itself for a leaf, the children for a group.
    pub fn item_ids(&self) -> &[ItemId] {
        match self {
            NavNode::Leaf(id) => std::slice::from_ref(id),
            NavNode::Group(group) => &group.children,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            NavNode::Group(group) => Some(group),
            NavNode::Leaf(_) => None,
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut Group> {
        match self {
            NavNode::Group(group) => Some(group),
            NavNode::Leaf(_) => None,
        }
    }
}

impl Group {
    /// Creates an empty ("draft") group.
    pub fn new(id: impl Into<GroupId>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ItemId>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    pub fn contains(&self, item: &str) -> bool {
        self.children.iter().any(|child| child == item)
    }
}

impl From<Group> for NavNode {
    fn from(group: Group) -> Self {
        NavNode::Group(group)
    }
}

// ============================================================================
// Wire shape
// ============================================================================

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawNode {
    Leaf(String),
    Group {
        id: String,
        #[serde(rename = "type")]
        kind: String,
        #[serde(default)]
        name: String,
        #[serde(default)]
        icon: String,
        #[serde(default)]
        children: Vec<String>,
    },
}

impl TryFrom<RawNode> for NavNode {
    type Error = String;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        match raw {
            RawNode::Leaf(id) => Ok(NavNode::Leaf(id)),
            RawNode::Group {
                id,
                kind,
                name,
                icon,
                children,
            } => {
                if kind != GROUP_TAG {
                    return Err(format!("unknown navigation node type '{kind}' (id '{id}')"));
                }
                Ok(NavNode::Group(Group {
                    id,
                    name,
                    icon,
                    children,
                }))
            }
        }
    }
}

impl From<NavNode> for RawNode {
    fn from(node: NavNode) -> Self {
        match node {
            NavNode::Leaf(id) => RawNode::Leaf(id),
            NavNode::Group(group) => RawNode::Group {
                id: group.id,
                kind: GROUP_TAG.to_string(),
                name: group.name,
                icon: group.icon,
                children: group.children,
            },
        }
    }
}
