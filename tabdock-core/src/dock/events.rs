//! Shared callback table
//!
//! [`Events`] holds the group-level notifications and the resolver used when
//! a drop carries a tab the tree does not know. A table is shared between
//! every layout and group of a subtree through an `Rc`.

use std::fmt;

use super::drop::DropPayload;
use super::tab::Tab;
use super::tab_group::TabGroup;

/// Group-level notification callback.
pub type GroupCallback<V> = Box<dyn Fn(&Tab<V>, &TabGroup<V>)>;

/// Resolves a dropped payload that matched no tab in the tree.
pub type UnknownDropResolver<V> = Box<dyn Fn(&DropPayload) -> Option<Tab<V>>>;

/// Group-level notification points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupEvent {
    /// A different tab is about to become active.
    BeforeTabToggle,
    /// A different tab became active.
    TabToggled,
    /// A tab is about to be removed.
    BeforeTabRemove,
    /// A tab was removed.
    TabRemoved,
    /// A tab is about to be added.
    BeforeTabAdd,
    /// A tab was added.
    TabAdded,
}

/// Optional callbacks shared across a layout subtree.
pub struct Events<V> {
    before_tab_toggle: Option<GroupCallback<V>>,
    tab_toggled: Option<GroupCallback<V>>,
    before_tab_remove: Option<GroupCallback<V>>,
    tab_removed: Option<GroupCallback<V>>,
    before_tab_add: Option<GroupCallback<V>>,
    tab_added: Option<GroupCallback<V>>,
    unknown_dropped: Option<UnknownDropResolver<V>>,
}

impl<V> Events<V> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            before_tab_toggle: None,
            tab_toggled: None,
            before_tab_remove: None,
            tab_removed: None,
            before_tab_add: None,
            tab_added: None,
            unknown_dropped: None,
        }
    }

    /// Sets the callback for `event`, replacing any previous one.
    #[must_use]
    pub fn on(mut self, event: GroupEvent, callback: impl Fn(&Tab<V>, &TabGroup<V>) + 'static) -> Self {
        *self.slot_mut(event) = Some(Box::new(callback));
        self
    }

    /// Sets `on_before_tab_toggle`.
    #[must_use]
    pub fn on_before_tab_toggle(self, callback: impl Fn(&Tab<V>, &TabGroup<V>) + 'static) -> Self {
        self.on(GroupEvent::BeforeTabToggle, callback)
    }

    /// Sets `on_tab_toggled`.
    #[must_use]
    pub fn on_tab_toggled(self, callback: impl Fn(&Tab<V>, &TabGroup<V>) + 'static) -> Self {
        self.on(GroupEvent::TabToggled, callback)
    }

    /// Sets `on_before_tab_remove`.
    #[must_use]
    pub fn on_before_tab_remove(self, callback: impl Fn(&Tab<V>, &TabGroup<V>) + 'static) -> Self {
        self.on(GroupEvent::BeforeTabRemove, callback)
    }

    /// Sets `on_tab_removed`.
    #[must_use]
    pub fn on_tab_removed(self, callback: impl Fn(&Tab<V>, &TabGroup<V>) + 'static) -> Self {
        self.on(GroupEvent::TabRemoved, callback)
    }

    /// Sets `on_before_tab_add`.
    #[must_use]
    pub fn on_before_tab_add(self, callback: impl Fn(&Tab<V>, &TabGroup<V>) + 'static) -> Self {
        self.on(GroupEvent::BeforeTabAdd, callback)
    }

    /// Sets `on_tab_added`.
    #[must_use]
    pub fn on_tab_added(self, callback: impl Fn(&Tab<V>, &TabGroup<V>) + 'static) -> Self {
        self.on(GroupEvent::TabAdded, callback)
    }

    /// Sets the resolver consulted when a dropped payload names no known tab.
    #[must_use]
    pub fn on_unknown_dropped(
        mut self,
        resolver: impl Fn(&DropPayload) -> Option<Tab<V>> + 'static,
    ) -> Self {
        self.unknown_dropped = Some(Box::new(resolver));
        self
    }

    /// Returns true if a callback is registered for `event`.
    pub fn handles(&self, event: GroupEvent) -> bool {
        self.slot(event).is_some()
    }

    pub(crate) fn emit(&self, event: GroupEvent, tab: &Tab<V>, group: &TabGroup<V>) {
        if let Some(callback) = self.slot(event) {
            callback(tab, group);
        }
    }

    pub(crate) fn resolve_unknown(&self, payload: &DropPayload) -> Option<Tab<V>> {
        self.unknown_dropped
            .as_ref()
            .and_then(|resolve| resolve(payload))
    }

    fn slot(&self, event: GroupEvent) -> Option<&GroupCallback<V>> {
        match event {
            GroupEvent::BeforeTabToggle => self.before_tab_toggle.as_ref(),
            GroupEvent::TabToggled => self.tab_toggled.as_ref(),
            GroupEvent::BeforeTabRemove => self.before_tab_remove.as_ref(),
            GroupEvent::TabRemoved => self.tab_removed.as_ref(),
            GroupEvent::BeforeTabAdd => self.before_tab_add.as_ref(),
            GroupEvent::TabAdded => self.tab_added.as_ref(),
        }
    }

    fn slot_mut(&mut self, event: GroupEvent) -> &mut Option<GroupCallback<V>> {
        match event {
            GroupEvent::BeforeTabToggle => &mut self.before_tab_toggle,
            GroupEvent::TabToggled => &mut self.tab_toggled,
            GroupEvent::BeforeTabRemove => &mut self.before_tab_remove,
            GroupEvent::TabRemoved => &mut self.tab_removed,
            GroupEvent::BeforeTabAdd => &mut self.before_tab_add,
            GroupEvent::TabAdded => &mut self.tab_added,
        }
    }
}

impl<V> Default for Events<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for Events<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Events")
            .field("before_tab_toggle", &self.before_tab_toggle.is_some())
            .field("tab_toggled", &self.tab_toggled.is_some())
            .field("before_tab_remove", &self.before_tab_remove.is_some())
            .field("tab_removed", &self.tab_removed.is_some())
            .field("before_tab_add", &self.before_tab_add.is_some())
            .field("tab_added", &self.tab_added.is_some())
            .field("unknown_dropped", &self.unknown_dropped.is_some())
            .finish()
    }
}
