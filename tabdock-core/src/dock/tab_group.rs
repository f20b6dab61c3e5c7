//! Tab groups
//!
//! A [`TabGroup`] is an ordered set of tabs with exactly one active tab while
//! it is non-empty. It fires the shared group callbacks and the tabs' own
//! lifecycle hooks in a fixed order:
//!
//! ```text
//! toggle: before-toggle, new before-mount, old before-unmount,
//!         <swap active, replace content, update selectors>,
//!         new mounted, old unmounted, tab-toggled
//! add:    before-add, <insert + selector>, toggle sequence, tab-added
//! remove: before-remove, <emptied notification | toggle away>,
//!         <remove + selector>, tab-removed
//! ```
//!
//! Render updates are queued on the group and drained by the owner with
//! [`TabGroup::take_render_commands`].

use std::fmt;
use std::rc::Rc;

use super::error::DockError;
use super::events::{Events, GroupEvent};
use super::render::{GroupView, RenderCommand, TabSelectorView};
use super::tab::{Tab, TabHookPoint};
use super::types::{GroupId, LayoutId, TabId};

/// An ordered collection of tabs with a single active tab.
pub struct TabGroup<V> {
    id: GroupId,
    items: Vec<Tab<V>>,
    active_id: Option<TabId>,
    parent: Option<LayoutId>,
    events: Rc<Events<V>>,
    pending: Vec<RenderCommand<V>>,
}

impl<V> TabGroup<V> {
    /// Creates a group from `tabs`, activating the first one.
    ///
    /// # Errors
    ///
    /// Returns `DockError::DuplicateId` if two tabs share an ID.
    pub fn new(tabs: Vec<Tab<V>>, events: Rc<Events<V>>) -> Result<Self, DockError> {
        for (index, tab) in tabs.iter().enumerate() {
            if tabs[..index].iter().any(|t| t.id() == tab.id()) {
                return Err(DockError::DuplicateId(tab.id().clone()));
            }
        }
        let active_id = tabs.first().map(|t| t.id().clone());
        Ok(Self {
            id: GroupId::new(),
            items: tabs,
            active_id,
            parent: None,
            events,
            pending: Vec::new(),
        })
    }

    /// Creates a group with an empty callback table.
    ///
    /// # Errors
    ///
    /// Returns `DockError::DuplicateId` if two tabs share an ID.
    pub fn from_tabs(tabs: Vec<Tab<V>>) -> Result<Self, DockError> {
        Self::new(tabs, Rc::new(Events::new()))
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns the group ID.
    pub const fn id(&self) -> GroupId {
        self.id
    }

    /// Returns the host layout owning this group, if any.
    pub const fn parent(&self) -> Option<LayoutId> {
        self.parent
    }

    /// Returns the tabs in display order.
    pub fn tabs(&self) -> &[Tab<V>] {
        &self.items
    }

    /// Returns the IDs of the tabs in display order.
    pub fn tab_ids(&self) -> Vec<TabId> {
        self.items.iter().map(|t| t.id().clone()).collect()
    }

    /// Returns the number of tabs.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the group holds no tab.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the ID of the active tab.
    pub const fn active_id(&self) -> Option<&TabId> {
        self.active_id.as_ref()
    }

    /// Returns the active tab.
    pub fn current_tab(&self) -> Option<&Tab<V>> {
        self.active_id.as_ref().and_then(|id| self.tab(id))
    }

    /// Returns the tab with the given ID.
    pub fn tab(&self, id: &TabId) -> Option<&Tab<V>> {
        self.items.iter().find(|t| t.id() == id)
    }

    /// Returns the display position of a tab.
    pub fn position(&self, id: &TabId) -> Option<usize> {
        self.items.iter().position(|t| t.id() == id)
    }

    /// Returns true if the group holds a tab with the given ID.
    pub fn does_exist(&self, id: &TabId) -> bool {
        self.position(id).is_some()
    }

    /// Returns true if the given tab is the active one.
    pub fn is_active(&self, id: &TabId) -> bool {
        self.active_id.as_ref() == Some(id)
    }

    /// Returns the callback table shared with the owning subtree.
    pub fn events(&self) -> &Rc<Events<V>> {
        &self.events
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Makes the tab with `id` the active tab.
    ///
    /// Does nothing if the tab is already active or is not in the group.
    /// Returns true if the active tab changed.
    pub fn toggle(&mut self, id: &TabId) -> bool {
        if self.is_active(id) {
            return false;
        }
        let Some(new_index) = self.position(id) else {
            return false;
        };
        let old_index = self.active_id.as_ref().and_then(|active| self.position(active));
        let events = Rc::clone(&self.events);

        events.emit(GroupEvent::BeforeTabToggle, &self.items[new_index], self);
        self.items[new_index].fire(TabHookPoint::BeforeMount, self);
        if let Some(old) = old_index {
            self.items[old].fire(TabHookPoint::BeforeUnmount, self);
        }

        self.active_id = Some(id.clone());
        let content = self.items[new_index].render_content();
        self.pending.push(RenderCommand::ReplaceContent {
            group: self.id,
            tab: id.clone(),
            content,
        });
        if let Some(old) = old_index {
            self.pending.push(RenderCommand::SetSelectorActive {
                group: self.id,
                tab: self.items[old].id().clone(),
                active: false,
            });
        }
        self.pending.push(RenderCommand::SetSelectorActive {
            group: self.id,
            tab: id.clone(),
            active: true,
        });

        self.items[new_index].fire(TabHookPoint::Mounted, self);
        if let Some(old) = old_index {
            self.items[old].fire(TabHookPoint::Unmounted, self);
        }
        events.emit(GroupEvent::TabToggled, &self.items[new_index], self);

        tracing::trace!(group = %self.id, tab = %id, "Tab toggled");
        true
    }

    /// Inserts `tab` at `position` (end of the group when `None`, clamped to
    /// the group length) and makes it the active tab.
    ///
    /// Returns the new number of tabs.
    ///
    /// # Errors
    ///
    /// Returns `DockError::DuplicateId` if the group already holds a tab with
    /// the same ID. The group is left unchanged.
    pub fn add(&mut self, tab: Tab<V>, position: Option<usize>) -> Result<usize, DockError> {
        if self.does_exist(tab.id()) {
            return Err(DockError::DuplicateId(tab.id().clone()));
        }
        let events = Rc::clone(&self.events);
        events.emit(GroupEvent::BeforeTabAdd, &tab, self);

        let index = position.unwrap_or(self.items.len()).min(self.items.len());
        let id = tab.id().clone();
        self.items.insert(index, tab);
        self.pending.push(RenderCommand::InsertSelector {
            group: self.id,
            index,
            selector: TabSelectorView::new(&self.items[index], false),
        });

        self.toggle(&id);
        events.emit(GroupEvent::TabAdded, &self.items[index], self);

        tracing::debug!(group = %self.id, tab = %id, index, "Tab added");
        Ok(self.items.len())
    }

    /// Removes the tab with `id` and returns the new number of tabs.
    ///
    /// Removing a tab that is not in the group is a no-op. A standalone
    /// group has no owner to notify when it runs empty; groups inside a
    /// [`Dock`](super::Dock) are emptied through `Dock::remove_tab` so the
    /// tree can collapse around them.
    pub fn remove(&mut self, id: &TabId) -> usize {
        self.take_with(id, |_| {});
        self.items.len()
    }

    /// Removes the tab with `id` and hands it back.
    ///
    /// When the tab is the last one, `on_emptied` runs before the tab leaves
    /// `items`, so the owner still sees a consistent group.
    pub(crate) fn take_with(
        &mut self,
        id: &TabId,
        on_emptied: impl FnOnce(&Self),
    ) -> Option<Tab<V>> {
        let index = self.position(id)?;
        let events = Rc::clone(&self.events);
        events.emit(GroupEvent::BeforeTabRemove, &self.items[index], self);

        if self.items.len() == 1 {
            on_emptied(self);
        } else if self.is_active(id) {
            let next = self
                .items
                .iter()
                .find(|t| t.id() != id)
                .map(|t| t.id().clone());
            if let Some(next) = next {
                self.toggle(&next);
            }
        }

        let tab = self.items.remove(index);
        if self.items.is_empty() {
            self.active_id = None;
            self.pending.push(RenderCommand::ClearContent { group: self.id });
        }
        self.pending.push(RenderCommand::RemoveSelector {
            group: self.id,
            tab: tab.id().clone(),
        });
        events.emit(GroupEvent::TabRemoved, &tab, self);

        tracing::debug!(group = %self.id, tab = %tab.id(), remaining = self.items.len(), "Tab removed");
        Some(tab)
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Renders the navigation strip and the active tab's content.
    pub fn render(&self) -> GroupView<V> {
        GroupView {
            id: self.id,
            selectors: self
                .items
                .iter()
                .map(|tab| TabSelectorView::new(tab, self.is_active(tab.id())))
                .collect(),
            content: self.current_tab().map(Tab::render_content),
        }
    }

    /// Drains the queued render updates.
    pub fn take_render_commands(&mut self) -> Vec<RenderCommand<V>> {
        std::mem::take(&mut self.pending)
    }

    // ========================================================================
    // Tree bookkeeping
    // ========================================================================

    pub(crate) fn set_parent(&mut self, parent: Option<LayoutId>) {
        self.parent = parent;
    }

    pub(crate) fn set_events(&mut self, events: Rc<Events<V>>) {
        self.events = events;
    }

    /// Fires `point` on the active tab only.
    pub(crate) fn fire_current(&self, point: TabHookPoint) {
        if let Some(tab) = self.current_tab() {
            tab.fire(point, self);
        }
    }
}

impl<V> fmt::Debug for TabGroup<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabGroup")
            .field("id", &self.id)
            .field("items", &self.items)
            .field("active_id", &self.active_id)
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}
