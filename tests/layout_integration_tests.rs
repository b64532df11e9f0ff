use std::collections::BTreeSet;

use navlayout::ListSide;
use navlayout::core::editor::{Editor, Effect};
use navlayout::core::groups::delete_group;
use navlayout::core::mover::move_to_end;
use navlayout::core::registry::StaticRegistry;
use navlayout::core::reorder::reorder;
use navlayout::core::store::{JsonFileStore, SettingsStore};
use navlayout::core::visibility::PROTECTED_ITEM;
use navlayout::core::{Action, Group, NavNode, Rejection, Settings, update};

// ============================================================================
// Helper Functions
// ============================================================================

fn leaves(ids: &[&str]) -> Vec<NavNode> {
    ids.iter().map(|id| NavNode::leaf(*id)).collect()
}

fn group(id: &str, name: &str, children: &[&str]) -> NavNode {
    Group::new(id, name, "Folder")
        .with_children(children.iter().copied())
        .into()
}

/// Every placed item id, sorted. Panics on a duplicate.
fn placed_items(state: &Settings) -> BTreeSet<String> {
    let mut set = BTreeSet::new();
    for id in state.item_ids() {
        assert!(set.insert(id.to_string()), "item '{id}' placed twice");
    }
    set
}

/// Small deterministic generator so failures reproduce.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % n.max(1) as u64) as usize
    }

    fn side(&mut self) -> ListSide {
        if self.next() % 2 == 0 { ListSide::Top } else { ListSide::Bottom }
    }
}

/// An existing group id, or now and then one that doesn't exist.
fn pick_group(rng: &mut XorShift, group_ids: &[String]) -> String {
    if group_ids.is_empty() || rng.below(10) == 0 {
        "ghost".to_string()
    } else {
        group_ids[rng.below(group_ids.len())].clone()
    }
}

fn random_action(rng: &mut XorShift, state: &Settings, items: &[&str]) -> Action {
    let group_ids: Vec<String> = state.groups().map(|g| g.id.clone()).collect();
    let item = items[rng.below(items.len())].to_string();

    match rng.below(9) {
        0 => Action::Reorder {
            side: rng.side(),
            from: rng.below(8),
            to: rng.below(8),
        },
        1 => Action::ReorderGroupChildren {
            group_id: pick_group(rng, &group_ids),
            from: rng.below(4),
            to: rng.below(4),
        },
        2 => {
            // Sometimes move a whole group.
            let id = if !group_ids.is_empty() && rng.below(3) == 0 {
                group_ids[rng.below(group_ids.len())].clone()
            } else {
                item
            };
            Action::MoveBetweenLists {
                id,
                from: rng.side(),
                to: rng.side(),
            }
        }
        3 => Action::CreateGroup {
            name: format!("G{}", rng.below(100)),
            icon: "Folder".into(),
            side: rng.side(),
        },
        4 => Action::EditGroup {
            group_id: pick_group(rng, &group_ids),
            name: "Renamed".into(),
            icon: "Star".into(),
        },
        5 => Action::DeleteGroup {
            group_id: pick_group(rng, &group_ids),
        },
        6 | 7 => Action::DropIntoGroup {
            item,
            group_id: pick_group(rng, &group_ids),
        },
        _ => Action::Ungroup {
            group_id: pick_group(rng, &group_ids),
            item,
        },
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_scenario_move_inbox_to_bottom() {
    let (top, bottom) = move_to_end("inbox", &leaves(&["calendar", "inbox"]), &leaves(&["settings"]));
    assert_eq!(top, leaves(&["calendar"]));
    assert_eq!(bottom, leaves(&["settings", "inbox"]));
}

#[test]
fn test_scenario_reorder_first_to_last() {
    let list = leaves(&["calendar", "inbox", "contacts"]);
    assert_eq!(reorder(&list, 0, 2), leaves(&["inbox", "contacts", "calendar"]));
}

#[test]
fn test_scenario_create_group_in_top() {
    let state = Settings::new(leaves(&["calendar", "inbox"]), vec![]);
    let next = update(
        &state,
        Action::CreateGroup {
            name: "Work".into(),
            icon: "Briefcase".into(),
            side: ListSide::Top,
        },
    )
    .unwrap();

    assert_eq!(next.top_nav_order.len(), 3);
    assert_eq!(&next.top_nav_order[..2], &leaves(&["calendar", "inbox"])[..]);
    let created = next.top_nav_order[2].as_group().unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.name, "Work");
    assert_eq!(created.icon, "Briefcase");
    assert!(created.children.is_empty());
}

#[test]
fn test_scenario_delete_group_promotes_children() {
    let state = Settings::new(
        vec![NavNode::leaf("contacts"), group("g1", "Work", &["calendar", "inbox"])],
        leaves(&["settings"]),
    );
    let next = delete_group(&state, "g1");
    assert_eq!(next.top_nav_order, leaves(&["contacts", "calendar", "inbox"]));
    assert_eq!(next.bottom_nav_order, state.bottom_nav_order);
}

#[test]
fn test_scenario_drop_into_group_in_other_list() {
    let state = Settings::new(leaves(&["calendar"]), vec![group("g1", "Work", &[])]);
    let next = update(
        &state,
        Action::DropIntoGroup {
            item: "calendar".into(),
            group_id: "g1".into(),
        },
    )
    .unwrap();
    assert!(next.top_nav_order.is_empty());
    assert_eq!(next.group("g1").unwrap().children, vec!["calendar"]);
}

#[test]
fn test_scenario_protected_item_stays_visible() {
    let state = Settings::new(vec![], leaves(&[PROTECTED_ITEM]));
    let result = update(
        &state,
        Action::SetVisible {
            item: PROTECTED_ITEM.into(),
            visible: false,
        },
    );
    assert_eq!(result, Err(Rejection::ProtectedItem(PROTECTED_ITEM.into())));
    assert!(state.is_visible(PROTECTED_ITEM));
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_drop_into_vanished_group_loses_nothing() {
    let state = Settings::new(
        vec![NavNode::leaf("calendar"), group("g1", "Work", &["inbox"])],
        leaves(&["settings"]),
    );
    for item in ["calendar", "inbox", "settings"] {
        let next = update(
            &state,
            Action::DropIntoGroup {
                item: item.into(),
                group_id: "deleted-meanwhile".into(),
            },
        )
        .unwrap();
        assert_eq!(next, state);
    }
}

#[test]
fn test_moving_group_between_lists_keeps_children() {
    let state = Settings::new(
        vec![group("g1", "Work", &["calendar", "inbox"])],
        leaves(&["settings"]),
    );
    let next = update(
        &state,
        Action::MoveBetweenLists {
            id: "g1".into(),
            from: ListSide::Top,
            to: ListSide::Bottom,
        },
    )
    .unwrap();
    assert!(next.top_nav_order.is_empty());
    assert_eq!(next.find_group("g1"), Some((ListSide::Bottom, 1)));
    assert_eq!(placed_items(&next), placed_items(&state));
}

#[test]
fn test_invariants_hold_over_random_sequences() {
    let items = ["calendar", "inbox", "contacts", "time-tracking", "leave", "settings"];
    for seed in 1..=25u64 {
        let mut rng = XorShift(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        let mut state = Settings::new(
            leaves(&["calendar", "inbox", "contacts"]),
            vec![group("g1", "Work", &["time-tracking", "leave"]), NavNode::leaf("settings")],
        );
        let expected = placed_items(&state);

        for _ in 0..200 {
            let action = random_action(&mut rng, &state, &items);
            let top_len = state.top_nav_order.len();
            let bottom_len = state.bottom_nav_order.len();
            let is_move = matches!(action, Action::MoveBetweenLists { .. });

            match update(&state, action.clone()) {
                Ok(next) => {
                    assert!(next.violations().is_empty(), "{action:?} broke invariants");
                    assert_eq!(placed_items(&next), expected, "{action:?} lost or added items");
                    if is_move {
                        assert_eq!(
                            next.top_nav_order.len() + next.bottom_nav_order.len(),
                            top_len + bottom_len
                        );
                    }
                    // Re-dropping is idempotent.
                    if let Action::DropIntoGroup { .. } = action {
                        assert_eq!(update(&next, action).unwrap(), next);
                    }
                    state = next;
                }
                Err(rejection) => panic!("unexpected rejection {rejection} for {action:?}"),
            }
        }
    }
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn test_editor_round_trip_through_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{
  "topNavOrder": ["calendar", {"id": "g1", "type": "group", "name": "Work", "icon": "Briefcase", "children": ["inbox"]}],
  "bottomNavOrder": ["settings"],
  "sidebarVisibility": {},
  "fontSize": 16,
  "language": "en"
}"#,
    )
    .unwrap();

    let registry = StaticRegistry::builtin();
    let mut editor = Editor::open(JsonFileStore::new(&path), &registry).unwrap();
    // contacts, time-tracking and leave were missing and get placed at the top.
    assert_eq!(editor.settings().top_nav_order.len(), 5);

    let effect = editor
        .apply(Action::DropIntoGroup {
            item: "calendar".into(),
            group_id: "g1".into(),
        })
        .unwrap();
    assert_eq!(effect, Effect::Saved);

    let rejected = editor.apply(Action::EditGroup {
        group_id: "g1".into(),
        name: "A name far too long for a group".into(),
        icon: "Briefcase".into(),
    });
    assert!(matches!(rejected, Err(Rejection::GroupNameTooLong { .. })));

    let reloaded = JsonFileStore::new(&path).load().unwrap();
    assert_eq!(&reloaded, editor.settings());
    assert_eq!(reloaded.group("g1").unwrap().children, vec!["inbox", "calendar"]);
    assert_eq!(reloaded.group("g1").unwrap().name, "Work");
    assert_eq!(reloaded.other["fontSize"], 16);
    assert_eq!(reloaded.other["language"], "en");
}
