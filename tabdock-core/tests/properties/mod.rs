//! Property-based test modules and shared tree checks

mod dock_tree_tests;
mod drop_routing_tests;
mod drop_zone_tests;
mod tab_group_tests;

use std::collections::HashSet;

use tabdock_core::dock::{Dock, LayoutId, LayoutKind, Tab, TabId};

/// Builds a tab whose content is its own ID
pub fn tab(id: &str) -> Tab<String> {
    let owned = id.to_string();
    Tab::new(id, format!("Tab {id}"), move || owned.clone())
}

/// Checks the structural invariants of every node in the dock.
///
/// - hosts own a group and have no children, splits have children
/// - splits have at least two children
/// - parent keys match the owning split, group parents match their host
/// - tab IDs are unique across the dock
/// - a non-empty group has an active tab it holds
pub fn check_tree(dock: &Dock<String>) -> Result<(), String> {
    let mut seen_tabs = HashSet::new();
    let mut seen_children = HashSet::new();

    for id in dock.layout_ids() {
        let layout = dock.layout(id).ok_or_else(|| format!("{id} vanished"))?;
        match layout.kind() {
            LayoutKind::Split { items, .. } => {
                if items.len() < 2 {
                    return Err(format!("{id} is a split with {} children", items.len()));
                }
                for child in items {
                    let child_layout = dock
                        .layout(*child)
                        .ok_or_else(|| format!("{id} lists missing child {child}"))?;
                    if child_layout.parent() != Some(id) {
                        return Err(format!("{child} does not point back at {id}"));
                    }
                    if !seen_children.insert(*child) {
                        return Err(format!("{child} has two parents"));
                    }
                }
            }
            LayoutKind::Host(group) => {
                if group.parent() != Some(id) {
                    return Err(format!("group of {id} points at {:?}", group.parent()));
                }
                if !group.is_empty() {
                    let active = group
                        .active_id()
                        .ok_or_else(|| format!("group of {id} has no active tab"))?;
                    if !group.does_exist(active) {
                        return Err(format!("group of {id} activates foreign tab {active}"));
                    }
                }
                for tab in group.tab_ids() {
                    if !seen_tabs.insert(tab.clone()) {
                        return Err(format!("tab {tab} appears twice"));
                    }
                }
            }
        }
        if let Some(parent) = layout.parent() {
            let listed = dock.layout(parent).is_some_and(|p| p.items().contains(&id));
            if !listed {
                return Err(format!("{id} is not listed by its parent {parent}"));
            }
        }
    }
    Ok(())
}

/// Returns the host layouts under `root` in display order
pub fn hosts(dock: &Dock<String>, root: LayoutId) -> Vec<LayoutId> {
    dock.descendants(root)
        .into_iter()
        .filter(|id| dock.layout(*id).is_some_and(|l| l.is_host()))
        .collect()
}

/// Returns all tab IDs under `root` in display order
pub fn all_tabs(dock: &Dock<String>, root: LayoutId) -> Vec<TabId> {
    dock.tab_ids(root)
}
