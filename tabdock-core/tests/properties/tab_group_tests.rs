//! Property-based tests for tab groups
//!
//! Covers activation, insertion positions, duplicate rejection and the
//! notification order of toggles.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use tabdock_core::dock::{Events, RenderCommand, Tab, TabGroup, TabId};

use super::tab;

// ============================================================================
// Test Strategies
// ============================================================================

/// Strategy for generating distinct tab ID lists
fn tab_ids_strategy(max: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::hash_set("[a-z]{1,4}", 1..=max).prop_map(|set| {
        let mut ids: Vec<String> = set.into_iter().collect();
        ids.sort();
        ids
    })
}

fn group_of(ids: &[String]) -> TabGroup<String> {
    TabGroup::from_tabs(ids.iter().map(|id| tab(id)).collect()).expect("distinct ids")
}

/// Tab that records every hook invocation into `log`
fn logged_tab(id: &str, log: &Rc<RefCell<Vec<String>>>) -> Tab<String> {
    let hooks = [
        ("before_mount", 0),
        ("mounted", 1),
        ("before_unmount", 2),
        ("unmounted", 3),
    ];
    let mut tab = tab(id);
    for (name, slot) in hooks {
        let sink = Rc::clone(log);
        let entry = format!("{id}:{name}");
        let hook = move |_: &TabGroup<String>| sink.borrow_mut().push(entry.clone());
        tab = match slot {
            0 => tab.on_before_mount(hook),
            1 => tab.on_mounted(hook),
            2 => tab.on_before_unmount(hook),
            _ => tab.on_unmounted(hook),
        };
    }
    tab
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A fresh group activates its first tab.
    #[test]
    fn prop_first_tab_active_on_construction(ids in tab_ids_strategy(8)) {
        let group = group_of(&ids);
        prop_assert_eq!(group.active_id().map(TabId::as_str), Some(ids[0].as_str()));
        prop_assert_eq!(group.len(), ids.len());
    }

    /// Toggling the active tab changes nothing and fires nothing.
    #[test]
    fn prop_toggle_active_is_noop(ids in tab_ids_strategy(6), pick in 0usize..6) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let tabs = ids.iter().map(|id| logged_tab(id, &log)).collect();
        let mut group = TabGroup::from_tabs(tabs).expect("distinct ids");
        let target = TabId::from(ids[pick % ids.len()].as_str());
        group.toggle(&target);
        group.take_render_commands();
        log.borrow_mut().clear();

        prop_assert!(!group.toggle(&target));
        prop_assert!(log.borrow().is_empty());
        prop_assert!(group.take_render_commands().is_empty());
        prop_assert_eq!(group.active_id(), Some(&target));
    }

    /// A toggle fires the new tab's hooks before the old tab's at each stage.
    #[test]
    fn prop_toggle_hook_order(ids in tab_ids_strategy(6).prop_filter("two tabs", |ids| ids.len() >= 2)) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let tabs = ids.iter().map(|id| logged_tab(id, &log)).collect();
        let mut group = TabGroup::from_tabs(tabs).expect("distinct ids");
        log.borrow_mut().clear();

        let old = &ids[0];
        let new = &ids[ids.len() - 1];
        prop_assert!(group.toggle(&TabId::from(new.as_str())));
        let expected = vec![
            format!("{new}:before_mount"),
            format!("{old}:before_unmount"),
            format!("{new}:mounted"),
            format!("{old}:unmounted"),
        ];
        prop_assert_eq!(&*log.borrow(), &expected);
    }

    /// Insertion positions clamp to the group length and the added tab
    /// becomes active.
    #[test]
    fn prop_add_clamps_position(ids in tab_ids_strategy(6), position in proptest::option::of(0usize..20)) {
        let mut group = group_of(&ids);
        let count = group.add(tab("ZZ"), position).expect("fresh id");
        let expected_index = position.unwrap_or(ids.len()).min(ids.len());

        prop_assert_eq!(count, ids.len() + 1);
        prop_assert_eq!(group.position(&TabId::from("ZZ")), Some(expected_index));
        prop_assert_eq!(group.active_id(), Some(&TabId::from("ZZ")));
        let inserted = group.take_render_commands().into_iter().any(|c| matches!(
            c,
            RenderCommand::InsertSelector { index, .. } if index == expected_index
        ));
        prop_assert!(inserted);
    }

    /// Adding an existing ID fails and leaves the group unchanged.
    #[test]
    fn prop_duplicate_add_rejected(ids in tab_ids_strategy(6), pick in 0usize..6) {
        let mut group = group_of(&ids);
        let before = group.tab_ids();
        let active = group.active_id().cloned();
        let duplicate = &ids[pick % ids.len()];

        prop_assert!(group.add(tab(duplicate), Some(0)).is_err());
        prop_assert_eq!(group.tab_ids(), before);
        prop_assert_eq!(group.active_id().cloned(), active);
    }

    /// After any removal the active tab is still in the group, and removing
    /// everything leaves no active tab.
    #[test]
    fn prop_remove_keeps_valid_active(
        ids in tab_ids_strategy(6),
        order in proptest::collection::vec(0usize..6, 0..8),
    ) {
        let mut group = group_of(&ids);
        for pick in order {
            let current = group.tab_ids();
            if current.is_empty() {
                break;
            }
            let victim = current[pick % current.len()].clone();
            let was_active = group.is_active(&victim);
            let left = group.remove(&victim);

            prop_assert_eq!(left, current.len() - 1);
            prop_assert!(!group.does_exist(&victim));
            match group.active_id() {
                Some(active) => prop_assert!(group.does_exist(active)),
                None => prop_assert!(group.is_empty()),
            }
            if was_active && !group.is_empty() {
                let first_other = current.iter().find(|id| **id != victim).cloned();
                prop_assert_eq!(group.active_id().cloned(), first_other);
            }
        }
    }

    /// Group events see the group state at the documented moments.
    #[test]
    fn prop_add_events_bracket_insertion(ids in tab_ids_strategy(5)) {
        let sizes = Rc::new(RefCell::new(Vec::new()));
        let before = Rc::clone(&sizes);
        let after = Rc::clone(&sizes);
        let events = Events::new()
            .on_before_tab_add(move |_, group| before.borrow_mut().push(group.len()))
            .on_tab_added(move |_, group| after.borrow_mut().push(group.len()));
        let mut group = TabGroup::new(ids.iter().map(|id| tab(id)).collect(), Rc::new(events))
            .expect("distinct ids");

        group.add(tab("ZZ"), None).expect("fresh id");
        prop_assert_eq!(&*sizes.borrow(), &vec![ids.len(), ids.len() + 1]);
    }
}
