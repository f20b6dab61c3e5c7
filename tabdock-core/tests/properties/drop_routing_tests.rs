//! Property-based tests for drop routing
//!
//! Drops are driven through raw drag data, the way a host toolkit would
//! deliver them.

use proptest::prelude::*;
use tabdock_core::dock::{Dock, DropOutcome, DropPayload, Events, Orientation, TabId};
use tabdock_core::drag_drop::DropZone;

use super::{check_tree, tab};

fn zone_strategy() -> impl Strategy<Value = DropZone> {
    prop_oneof![
        Just(DropZone::Left),
        Just(DropZone::Right),
        Just(DropZone::Top),
        Just(DropZone::Bottom),
        Just(DropZone::Center),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Dropping a group's only tab onto that group never changes anything.
    #[test]
    fn prop_self_drop_is_noop(zone in zone_strategy()) {
        let mut dock = Dock::new();
        let single = dock.create_host(vec![tab("solo")]).expect("single");
        let other = dock.create_host(vec![tab("x"), tab("y")]).expect("other");
        let root = dock.create_split(vec![single, other], Orientation::Row).expect("root");
        dock.take_render_commands();

        let data = DropPayload::for_tab(&TabId::from("solo")).to_json();
        let outcome = dock.on_drop(single, zone, &data).expect("drop");

        prop_assert_eq!(outcome, DropOutcome::SelfDrop);
        prop_assert!(dock.pending_render_commands().is_empty());
        prop_assert_eq!(dock.layout(root).map(|l| l.items().to_vec()), Some(vec![single, other]));
    }

    /// Arbitrary drag data never fails a drop; unresolvable data is ignored.
    #[test]
    fn prop_arbitrary_data_is_ignored(data in ".*", zone in zone_strategy()) {
        let mut dock = Dock::new();
        let host = dock.create_host(vec![tab("a"), tab("b")]).expect("host");
        let known = ["a", "b"];
        let payload = DropPayload::parse(&data);
        prop_assume!(payload.id().is_none_or(|id| !known.contains(&id)));

        let outcome = dock.on_drop(host, zone, &data).expect("drop never errors");
        prop_assert_eq!(outcome, DropOutcome::Ignored);
        prop_assert_eq!(dock.len(), 1);
    }

    /// An edge drop creates a host next to the target on the zone's axis.
    #[test]
    fn prop_edge_drop_orientation(zone in zone_strategy().prop_filter("edge", |z| z.is_edge())) {
        let mut dock = Dock::new();
        let target = dock.create_host(vec![tab("t")]).expect("target");
        let source = dock.create_host(vec![tab("s"), tab("m")]).expect("source");
        dock.create_split(vec![target, source], Orientation::Row).expect("root");

        let data = DropPayload::for_tab(&TabId::from("m")).to_json();
        let outcome = dock.on_drop(target, zone, &data).expect("drop");
        let DropOutcome::Split { layout, .. } = outcome else {
            return Err(TestCaseError::fail(format!("expected split, got {outcome:?}")));
        };

        let parent = dock.layout(layout).and_then(|l| l.parent()).expect("parent");
        let expected = if matches!(zone, DropZone::Left | DropZone::Right) {
            Orientation::Row
        } else {
            Orientation::Column
        };
        let parent_layout = dock.layout(parent).expect("parent layout");
        prop_assert_eq!(parent_layout.orientation(), expected);

        let items = parent_layout.items();
        let new_index = items.iter().position(|id| *id == layout).expect("listed");
        let target_index = items
            .iter()
            .position(|id| dock.find_tab(*id, &TabId::from("t")).is_some())
            .expect("target listed");
        let before = matches!(zone, DropZone::Left | DropZone::Top);
        prop_assert_eq!(new_index < target_index, before);
        prop_assert!(check_tree(&dock).is_ok());
    }

    /// Resolved unknown drops land in the tree exactly once.
    #[test]
    fn prop_resolved_unknown_drop_adds_tab(zone in zone_strategy(), name in "[a-z]{3,6}") {
        let events = Events::new().on_unknown_dropped(|payload: &DropPayload| {
            payload.id().map(|id| tab(&format!("ext-{id}")))
        });
        let mut dock = Dock::with_events(events);
        let host = dock.create_host(vec![tab("a")]).expect("host");

        let data = DropPayload::for_tab(&TabId::from(name.as_str())).to_json();
        let outcome = dock.on_drop(host, zone, &data).expect("drop");
        prop_assert!(outcome.is_applied());

        let root = dock.upmost_parent(host).expect("root");
        let added = TabId::from(format!("ext-{name}"));
        prop_assert!(dock.find_tab(root, &added).is_some());
        prop_assert_eq!(dock.tab_ids(root).len(), 2);
        prop_assert!(check_tree(&dock).is_ok());
    }
}
