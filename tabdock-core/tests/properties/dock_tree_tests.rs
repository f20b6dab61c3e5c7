//! Property-based tests for the layout tree
//!
//! Random sequences of structural and tab operations must leave the tree
//! consistent after every step: no single-child splits, parent keys in
//! sync, tab IDs unique, the root always present.

use proptest::prelude::*;
use tabdock_core::dock::{Dock, LayoutId, Orientation, TabId};
use tabdock_core::drag_drop::DropZone;

use super::{all_tabs, check_tree, hosts, tab};

// ============================================================================
// Test Strategies
// ============================================================================

fn orientation_strategy() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Row), Just(Orientation::Column)]
}

fn zone_strategy() -> impl Strategy<Value = DropZone> {
    prop_oneof![
        Just(DropZone::Left),
        Just(DropZone::Right),
        Just(DropZone::Top),
        Just(DropZone::Bottom),
        Just(DropZone::Center),
    ]
}

/// Represents an operation that can be performed on a dock
#[derive(Debug, Clone)]
enum DockOperation {
    /// Insert a new host next to a layout (by index into descendants)
    AddLayout {
        layout_index: usize,
        before: bool,
        orientation: Orientation,
    },
    /// Remove a child of a split (by index into splits, then children)
    RemoveLayout {
        split_index: usize,
        child_index: usize,
    },
    /// Remove a tab (by index into all tabs)
    RemoveTab { tab_index: usize },
    /// Add a fresh tab to a host (by index into hosts)
    AddTab { host_index: usize },
    /// Activate a tab (by index into all tabs)
    Toggle { tab_index: usize },
    /// Drag a tab onto a host
    Drop {
        tab_index: usize,
        host_index: usize,
        zone: DropZone,
    },
}

fn operation_strategy() -> impl Strategy<Value = DockOperation> {
    prop_oneof![
        (0usize..16, any::<bool>(), orientation_strategy()).prop_map(
            |(layout_index, before, orientation)| DockOperation::AddLayout {
                layout_index,
                before,
                orientation,
            }
        ),
        (0usize..8, 0usize..8).prop_map(|(split_index, child_index)| {
            DockOperation::RemoveLayout {
                split_index,
                child_index,
            }
        }),
        (0usize..16).prop_map(|tab_index| DockOperation::RemoveTab { tab_index }),
        (0usize..16).prop_map(|host_index| DockOperation::AddTab { host_index }),
        (0usize..16).prop_map(|tab_index| DockOperation::Toggle { tab_index }),
        (0usize..16, 0usize..16, zone_strategy()).prop_map(|(tab_index, host_index, zone)| {
            DockOperation::Drop {
                tab_index,
                host_index,
                zone,
            }
        }),
    ]
}

fn operations_strategy(max_ops: usize) -> impl Strategy<Value = Vec<DockOperation>> {
    proptest::collection::vec(operation_strategy(), 0..=max_ops)
}

/// Builds `row[host(a, b), column[host(c), host(d)]]`
fn seeded_dock() -> (Dock<String>, LayoutId) {
    let mut dock = Dock::new();
    let ab = dock.create_host(vec![tab("a"), tab("b")]).expect("ab");
    let c = dock.create_host(vec![tab("c")]).expect("c");
    let d = dock.create_host(vec![tab("d")]).expect("d");
    let column = dock.create_split(vec![c, d], Orientation::Column).expect("column");
    let root = dock.create_split(vec![ab, column], Orientation::Row).expect("root");
    (dock, root)
}

/// Applies an operation, ignoring precondition failures
fn apply_operation(dock: &mut Dock<String>, root: LayoutId, op: &DockOperation, fresh: &mut usize) {
    let mut next_tab = || {
        *fresh += 1;
        tab(&format!("n{fresh}"))
    };
    match op {
        DockOperation::AddLayout {
            layout_index,
            before,
            orientation,
        } => {
            let layouts = dock.descendants(root);
            let target = layouts[layout_index % layouts.len()];
            let _ = dock.add_layout(target, vec![next_tab()], *before, *orientation);
        }
        DockOperation::RemoveLayout {
            split_index,
            child_index,
        } => {
            let splits: Vec<LayoutId> = dock
                .descendants(root)
                .into_iter()
                .filter(|id| dock.for_layout(*id).unwrap_or(false))
                .collect();
            if !splits.is_empty() {
                let split = splits[split_index % splits.len()];
                let children = dock.layout(split).map(|l| l.items().to_vec()).unwrap_or_default();
                if !children.is_empty() {
                    let child = children[child_index % children.len()];
                    let _ = dock.remove_layout(split, child);
                }
            }
        }
        DockOperation::RemoveTab { tab_index } => {
            let tabs = all_tabs(dock, root);
            if !tabs.is_empty() {
                let id = &tabs[tab_index % tabs.len()];
                if let Some(host) = dock.find_tab(root, id).map(|found| found.layout) {
                    let _ = dock.remove_tab(host, id);
                }
            }
        }
        DockOperation::AddTab { host_index } => {
            let hosts = hosts(dock, root);
            let host = hosts[host_index % hosts.len()];
            let _ = dock.add_tab(host, next_tab(), None);
        }
        DockOperation::Toggle { tab_index } => {
            let tabs = all_tabs(dock, root);
            if !tabs.is_empty() {
                let id = &tabs[tab_index % tabs.len()];
                if let Some(host) = dock.find_tab(root, id).map(|found| found.layout) {
                    let _ = dock.toggle_tab(host, id);
                }
            }
        }
        DockOperation::Drop {
            tab_index,
            host_index,
            zone,
        } => {
            let tabs = all_tabs(dock, root);
            if !tabs.is_empty() {
                let id = &tabs[tab_index % tabs.len()];
                let hosts = hosts(dock, root);
                let host = hosts[host_index % hosts.len()];
                let data = tabdock_core::dock::DropPayload::for_tab(id).to_json();
                let _ = dock.on_drop(host, *zone, &data);
            }
        }
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every operation sequence leaves a consistent tree rooted at the
    /// seeded root.
    #[test]
    fn prop_operations_preserve_tree_invariants(ops in operations_strategy(30)) {
        let (mut dock, root) = seeded_dock();
        let mut fresh = 0;
        for op in &ops {
            apply_operation(&mut dock, root, op, &mut fresh);
            prop_assert!(dock.contains(root), "root vanished after {:?}", op);
            prop_assert_eq!(dock.upmost_parent(root), Ok(root));
            if let Err(problem) = check_tree(&dock) {
                prop_assert!(false, "after {:?}: {}", op, problem);
            }
        }
    }

    /// Every node in the arena is reachable from the root.
    #[test]
    fn prop_no_orphaned_nodes(ops in operations_strategy(30)) {
        let (mut dock, root) = seeded_dock();
        let mut fresh = 0;
        for op in &ops {
            apply_operation(&mut dock, root, op, &mut fresh);
        }
        prop_assert_eq!(dock.descendants(root).len(), dock.len());
        prop_assert_eq!(dock.roots(), vec![root]);
    }

    /// Moving tabs around never loses or duplicates a tab.
    #[test]
    fn prop_drops_preserve_tab_set(
        drops in proptest::collection::vec((0usize..16, 0usize..16, zone_strategy()), 0..20)
    ) {
        let (mut dock, root) = seeded_dock();
        let mut expected: Vec<TabId> = all_tabs(&dock, root);
        expected.sort_by(|a, b| a.as_str().cmp(b.as_str()));

        let mut fresh = 0;
        for (tab_index, host_index, zone) in drops {
            let op = DockOperation::Drop { tab_index, host_index, zone };
            apply_operation(&mut dock, root, &op, &mut fresh);
        }

        let mut actual = all_tabs(&dock, root);
        actual.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        prop_assert_eq!(actual, expected);
    }

    /// `add_layout` adds exactly one host and one tab.
    #[test]
    fn prop_add_layout_adds_one_host(
        layout_index in 0usize..8,
        before in any::<bool>(),
        orientation in orientation_strategy(),
    ) {
        let (mut dock, root) = seeded_dock();
        let hosts_before = hosts(&dock, root).len();
        let layouts = dock.descendants(root);
        let target = layouts[layout_index % layouts.len()];

        let new = dock.add_layout(target, vec![tab("x")], before, orientation).expect("add");

        prop_assert_eq!(hosts(&dock, root).len(), hosts_before + 1);
        prop_assert_eq!(dock.find_tab(root, &TabId::from("x")).map(|f| f.layout), Some(new));
        let parent = dock.layout(new).and_then(|l| l.parent()).expect("new host has a parent");
        prop_assert_eq!(dock.layout(parent).map(|l| l.orientation()), Some(orientation));
        prop_assert!(check_tree(&dock).is_ok());
    }

    /// Converting a host to a split and back restores the group.
    #[test]
    fn prop_layout_group_round_trip(
        orientation in orientation_strategy(),
        active in 0usize..3,
    ) {
        let mut dock = Dock::new();
        let ids = ["p", "q", "r"];
        let host = dock.create_host(ids.iter().map(|id| tab(id)).collect()).expect("host");
        let active_id = TabId::from(ids[active]);
        dock.toggle_tab(host, &active_id).expect("toggle");
        let group_id = dock.group(host).map(|g| g.id());

        dock.to_layout_group(host, orientation).expect("to split");
        dock.to_tab_group(host).expect("to host");

        let group = dock.group(host).expect("group restored");
        prop_assert_eq!(Some(group.id()), group_id);
        prop_assert_eq!(group.active_id(), Some(&active_id));
        prop_assert_eq!(group.tab_ids(), ids.iter().map(|id| TabId::from(*id)).collect::<Vec<_>>());
        prop_assert_eq!(dock.len(), 1);
    }
}
