//! Plain-text rendering of a layout, one line per entry.
//!
//! ```text
//! top
//!   0  Calendar
//!   1  [Work] group-1f0c… (Briefcase)
//!        0  Inbox
//!        1  payroll (unregistered)
//!   2  Leave (hidden)
//! bottom
//!   0  Settings
//! ```

use std::fmt::Write;

use crate::core::node::NavNode;
use crate::core::registry::NavRegistry;
use crate::core::state::{SIDES, Settings};

pub fn render(settings: &Settings, registry: &dyn NavRegistry) -> String {
    let mut out = String::new();
    for side in SIDES {
        let _ = writeln!(out, "{}", side.label());
        let list = settings.list(side);
        if list.is_empty() {
            let _ = writeln!(out, "  (empty)");
        }
        for (index, node) in list.iter().enumerate() {
            match node {
                NavNode::Leaf(id) => {
                    let _ = writeln!(out, "  {index}  {}", item_label(settings, registry, id));
                }
                NavNode::Group(group) => {
                    let _ = writeln!(out, "  {index}  [{}] {} ({})", group.name, group.id, group.icon);
                    if group.children.is_empty() {
                        let _ = writeln!(out, "       (empty)");
                    }
                    for (child_index, child) in group.children.iter().enumerate() {
                        let _ = writeln!(
                            out,
                            "       {child_index}  {}",
                            item_label(settings, registry, child)
                        );
                    }
                }
            }
        }
    }
    out
}

fn item_label(settings: &Settings, registry: &dyn NavRegistry, id: &str) -> String {
    let mut label = match registry.lookup(id) {
        Some(item) => item.title.clone(),
        None => format!("{id} (unregistered)"),
    };
    if !settings.is_visible(id) {
        label.push_str(" (hidden)");
    }
    label
}
