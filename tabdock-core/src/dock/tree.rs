//! Dock: the arena owning every layout node
//!
//! All structural operations go through [`Dock`] so that parent keys, group
//! ownership and the no-singleton-split rule stay consistent. Every public
//! mutation that changes the structure queues a [`RenderCommand::Rebuild`]
//! for the subtree it touched, after the tree is consistent again.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::error::DockError;
use super::events::Events;
use super::layout::{Layout, LayoutItem, LayoutKind, LayoutOptions};
use super::render::{LayoutView, RenderCommand};
use super::tab::{Tab, TabHookPoint};
use super::tab_group::TabGroup;
use super::types::{GroupId, LayoutId, Orientation, TabId};
use crate::tracing::span_names;

/// A tab found by [`Dock::find_tab`], with the group holding it.
pub struct TabMatch<'a, V> {
    /// The tab.
    pub tab: &'a Tab<V>,
    /// The group holding the tab.
    pub group: &'a TabGroup<V>,
    /// The host layout owning the group.
    pub layout: LayoutId,
}

impl<V> Clone for TabMatch<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for TabMatch<'_, V> {}

impl<V> fmt::Debug for TabMatch<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabMatch")
            .field("tab", self.tab.id())
            .field("group", &self.group.id())
            .field("layout", &self.layout)
            .finish()
    }
}

/// Owner of a forest of layout trees.
///
/// Layouts are created free-standing (as roots) and composed into splits
/// by passing their IDs to [`Dock::create_layout`]. Independent roots may
/// coexist; tab IDs are unique across the whole dock.
pub struct Dock<V> {
    nodes: HashMap<LayoutId, Layout<V>>,
    events: Rc<Events<V>>,
    commands: Vec<RenderCommand<V>>,
}

impl<V> Dock<V> {
    /// Creates an empty dock with an empty default callback table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_events(Events::new())
    }

    /// Creates an empty dock whose layouts use `events` unless built with
    /// their own table.
    #[must_use]
    pub fn with_events(events: Events<V>) -> Self {
        Self {
            nodes: HashMap::new(),
            events: Rc::new(events),
            commands: Vec::new(),
        }
    }

    /// Returns the default callback table.
    pub fn events(&self) -> &Rc<Events<V>> {
        &self.events
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Builds a layout from a homogeneous list.
    ///
    /// A list of tabs produces a tab host. A list of layout IDs produces a
    /// split node adopting those layouts as children, in order.
    ///
    /// # Errors
    ///
    /// - `DockError::EmptyInput` if `items` is empty
    /// - `DockError::MixedContent` if tabs and layouts are mixed
    /// - `DockError::DuplicateId` if a tab ID is already used in the dock
    /// - `DockError::UnknownLayout` if a child is not in this dock
    /// - `DockError::AlreadyAttached` if a child already has a parent
    pub fn create_layout(
        &mut self,
        items: Vec<LayoutItem<V>>,
        options: LayoutOptions<V>,
    ) -> Result<LayoutId, DockError> {
        if items.is_empty() {
            return Err(DockError::EmptyInput);
        }
        let mut tabs = Vec::new();
        let mut children = Vec::new();
        for item in items {
            match item {
                LayoutItem::Tab(tab) => tabs.push(tab),
                LayoutItem::Layout(id) => children.push(id),
            }
        }
        if !tabs.is_empty() && !children.is_empty() {
            return Err(DockError::MixedContent);
        }

        let explicit = options.events.is_some();
        let events = options.events.unwrap_or_else(|| Rc::clone(&self.events));
        let id = if children.is_empty() {
            self.insert_host(tabs, Rc::clone(&events), None)?
        } else {
            self.insert_split(children, options.orientation, Rc::clone(&events))?
        };
        if explicit {
            self.propagate_events(id, &events);
        }

        tracing::debug!(layout = %id, "Layout created");
        Ok(id)
    }

    /// Builds a tab host from `tabs`.
    ///
    /// # Errors
    ///
    /// See [`Dock::create_layout`].
    pub fn create_host(&mut self, tabs: Vec<Tab<V>>) -> Result<LayoutId, DockError> {
        self.create_layout(
            tabs.into_iter().map(LayoutItem::Tab).collect(),
            LayoutOptions::new(),
        )
    }

    /// Builds a split node adopting `children`.
    ///
    /// # Errors
    ///
    /// See [`Dock::create_layout`].
    pub fn create_split(
        &mut self,
        children: Vec<LayoutId>,
        orientation: Orientation,
    ) -> Result<LayoutId, DockError> {
        self.create_layout(
            children.into_iter().map(LayoutItem::Layout).collect(),
            LayoutOptions::new().with_orientation(orientation),
        )
    }

    fn insert_host(
        &mut self,
        tabs: Vec<Tab<V>>,
        events: Rc<Events<V>>,
        parent: Option<LayoutId>,
    ) -> Result<LayoutId, DockError> {
        if let Some(taken) = tabs.iter().find(|t| self.contains_tab(t.id())) {
            return Err(DockError::DuplicateId(taken.id().clone()));
        }
        let group = TabGroup::new(tabs, Rc::clone(&events))?;
        let id = LayoutId::new();
        let mut layout = Layout::host(id, group, events);
        layout.set_parent(parent);
        self.nodes.insert(id, layout);
        Ok(id)
    }

    fn insert_split(
        &mut self,
        children: Vec<LayoutId>,
        orientation: Orientation,
        events: Rc<Events<V>>,
    ) -> Result<LayoutId, DockError> {
        for (index, child) in children.iter().enumerate() {
            let node = self.node(*child)?;
            if node.parent().is_some() || children[..index].contains(child) {
                return Err(DockError::AlreadyAttached(*child));
            }
        }
        let id = LayoutId::new();
        for child in &children {
            if let Some(node) = self.nodes.get_mut(child) {
                node.set_parent(Some(id));
            }
        }
        self.nodes
            .insert(id, Layout::split(id, orientation, children, events));
        Ok(id)
    }

    fn propagate_events(&mut self, id: LayoutId, events: &Rc<Events<V>>) {
        for descendant in self.descendants(id) {
            if let Some(node) = self.nodes.get_mut(&descendant) {
                node.set_events(Rc::clone(events));
            }
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns the layout with the given ID.
    pub fn layout(&self, id: LayoutId) -> Option<&Layout<V>> {
        self.nodes.get(&id)
    }

    /// Returns true if the layout is part of this dock.
    pub fn contains(&self, id: LayoutId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns the number of layout nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the dock holds no layout.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the IDs of every layout node, in no particular order.
    pub fn layout_ids(&self) -> Vec<LayoutId> {
        self.nodes.keys().copied().collect()
    }

    /// Returns the IDs of every root layout, in no particular order.
    pub fn roots(&self) -> Vec<LayoutId> {
        self.nodes
            .values()
            .filter(|node| node.parent().is_none())
            .map(Layout::id)
            .collect()
    }

    /// Returns the group hosted by `host`.
    pub fn group(&self, host: LayoutId) -> Option<&TabGroup<V>> {
        self.nodes.get(&host).and_then(Layout::group)
    }

    /// Returns true if `id` is a split node.
    ///
    /// # Errors
    ///
    /// Returns `DockError::UnknownLayout` if the layout is not in this dock.
    pub fn for_layout(&self, id: LayoutId) -> Result<bool, DockError> {
        self.node(id).map(Layout::for_layout)
    }

    /// Returns the root of the tree containing `id`.
    ///
    /// # Errors
    ///
    /// Returns `DockError::UnknownLayout` if the layout is not in this dock.
    pub fn upmost_parent(&self, id: LayoutId) -> Result<LayoutId, DockError> {
        let mut current = self.node(id)?;
        // parent keys never form a cycle; the bound guards a corrupted arena
        for _ in 0..self.nodes.len() {
            match current.parent() {
                Some(parent) => current = self.node(parent)?,
                None => break,
            }
        }
        Ok(current.id())
    }

    /// Returns true if `id` is the root of its tree.
    ///
    /// # Errors
    ///
    /// Returns `DockError::UnknownLayout` if the layout is not in this dock.
    pub fn is_upmost_parent(&self, id: LayoutId) -> Result<bool, DockError> {
        Ok(self.upmost_parent(id)? == id)
    }

    /// Depth-first search for a tab, starting at `from`.
    ///
    /// Hosts are checked directly; splits are searched child by child in
    /// display order. Returns the first match.
    pub fn find_tab(&self, from: LayoutId, tab: &TabId) -> Option<TabMatch<'_, V>> {
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(&id) else {
                continue;
            };
            match node.kind() {
                LayoutKind::Host(group) => {
                    if let Some(found) = group.tab(tab) {
                        return Some(TabMatch {
                            tab: found,
                            group,
                            layout: id,
                        });
                    }
                }
                LayoutKind::Split { items, .. } => stack.extend(items.iter().rev().copied()),
            }
        }
        None
    }

    /// Returns true if any group of the dock holds the tab.
    pub fn contains_tab(&self, tab: &TabId) -> bool {
        self.nodes
            .values()
            .filter_map(Layout::group)
            .any(|group| group.does_exist(tab))
    }

    /// Returns the host layout currently owning the group.
    pub fn host_of_group(&self, group: GroupId) -> Option<LayoutId> {
        self.nodes
            .values()
            .find(|node| node.group().is_some_and(|g| g.id() == group))
            .map(Layout::id)
    }

    /// Returns `id` and all its descendants in depth-first pre-order.
    pub fn descendants(&self, id: LayoutId) -> Vec<LayoutId> {
        let mut order = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get(&current) {
                order.push(current);
                stack.extend(node.items().iter().rev().copied());
            }
        }
        order
    }

    /// Returns the IDs of all tabs under `id`, in depth-first display order.
    pub fn tab_ids(&self, id: LayoutId) -> Vec<TabId> {
        self.descendants(id)
            .into_iter()
            .filter_map(|layout| self.group(layout))
            .flat_map(TabGroup::tab_ids)
            .collect()
    }

    /// Returns the depth of the subtree at `id`. A tab host has depth 0.
    pub fn depth(&self, id: LayoutId) -> usize {
        self.nodes.get(&id).map_or(0, |node| {
            node.items()
                .iter()
                .map(|child| 1 + self.depth(*child))
                .max()
                .unwrap_or(0)
        })
    }

    fn node(&self, id: LayoutId) -> Result<&Layout<V>, DockError> {
        self.nodes.get(&id).ok_or(DockError::UnknownLayout(id))
    }

    fn node_mut(&mut self, id: LayoutId) -> Result<&mut Layout<V>, DockError> {
        self.nodes.get_mut(&id).ok_or(DockError::UnknownLayout(id))
    }

    fn group_mut(&mut self, host: LayoutId) -> Result<&mut TabGroup<V>, DockError> {
        self.node_mut(host)?
            .group_mut()
            .ok_or(DockError::NotTabHost(host))
    }

    // ========================================================================
    // Structural transforms
    // ========================================================================

    /// Turns a tab host into a split node whose single child re-hosts the
    /// previous group. On a split node only the orientation changes.
    ///
    /// The single-child split produced here is an intermediate shape; callers
    /// are expected to add a sibling or to call [`Dock::to_tab_group`].
    ///
    /// # Errors
    ///
    /// Returns `DockError::UnknownLayout` if the layout is not in this dock.
    pub fn to_layout_group(
        &mut self,
        id: LayoutId,
        orientation: Orientation,
    ) -> Result<(), DockError> {
        let _span = crate::trace_operation_debug!(span_names::LAYOUT_TRANSFORM, layout = %id).entered();
        self.convert_to_split(id, orientation)?;
        self.rebuild(id);
        Ok(())
    }

    /// Turns a split node with exactly one hosting child back into a tab
    /// host owning that child's group.
    ///
    /// # Errors
    ///
    /// - `DockError::InvalidTransition` if the node does not have exactly one
    ///   child (tab hosts have none)
    /// - `DockError::NotTabHost` if the single child is itself a split
    pub fn to_tab_group(&mut self, id: LayoutId) -> Result<(), DockError> {
        let _span = crate::trace_operation_debug!(span_names::LAYOUT_TRANSFORM, layout = %id).entered();
        self.collapse_into_host(id)?;
        self.rebuild(id);
        Ok(())
    }

    fn convert_to_split(&mut self, id: LayoutId, orientation: Orientation) -> Result<(), DockError> {
        let node = self.node_mut(id)?;
        if let Some(current) = node.orientation_mut() {
            *current = orientation;
            return Ok(());
        }
        let child = LayoutId::new();
        let events = Rc::clone(node.events());
        if let LayoutKind::Host(group) = node.set_kind(LayoutKind::Split {
            orientation,
            items: vec![child],
        }) {
            let mut host = Layout::host(child, group, events);
            host.set_parent(Some(id));
            self.nodes.insert(child, host);
        }
        Ok(())
    }

    fn collapse_into_host(&mut self, id: LayoutId) -> Result<(), DockError> {
        let node = self.node(id)?;
        let child = match node.items() {
            [single] if node.for_layout() => *single,
            items => {
                return Err(DockError::InvalidTransition {
                    layout: id,
                    children: items.len(),
                });
            }
        };
        if !self.node(child)?.is_host() {
            return Err(DockError::NotTabHost(child));
        }
        let removed = self
            .nodes
            .remove(&child)
            .ok_or(DockError::UnknownLayout(child))?;
        if let LayoutKind::Host(group) = removed.into_kind() {
            self.node_mut(id)?.set_kind(LayoutKind::Host(group));
        }
        Ok(())
    }

    /// Wraps the children of a split node into a new child split so that
    /// the node can take a different orientation without rearranging them.
    fn wrap_children(&mut self, id: LayoutId, orientation: Orientation) -> Result<(), DockError> {
        let wrapper = LayoutId::new();
        let node = self.node_mut(id)?;
        let events = Rc::clone(node.events());
        let old = node.set_kind(LayoutKind::Split {
            orientation,
            items: vec![wrapper],
        });
        if let LayoutKind::Split {
            orientation: inner,
            items,
        } = old
        {
            let mut layout = Layout::split(wrapper, inner, items, events);
            layout.set_parent(Some(id));
            self.nodes.insert(wrapper, layout);
            self.update_parenthood(wrapper, Some(id))?;
        }
        Ok(())
    }

    /// Inserts a new tab host built from `tabs` next to `id`.
    ///
    /// If the parent of `id` is already laid out along `orientation`, the new
    /// host is spliced into the parent right before or after `id`. Otherwise
    /// `id` itself becomes a split along `orientation` holding its previous
    /// content and the new host (first when `before`, last otherwise).
    ///
    /// Returns the ID of the new host.
    ///
    /// # Errors
    ///
    /// - `DockError::EmptyInput` if `tabs` is empty
    /// - `DockError::DuplicateId` if a tab ID is already used in the dock
    /// - `DockError::UnknownLayout` if the layout is not in this dock
    pub fn add_layout(
        &mut self,
        id: LayoutId,
        tabs: Vec<Tab<V>>,
        before: bool,
        orientation: Orientation,
    ) -> Result<LayoutId, DockError> {
        let _span = crate::trace_operation_debug!(
            span_names::LAYOUT_ADD,
            layout = %id,
            before,
            orientation = %orientation
        )
        .entered();

        if tabs.is_empty() {
            return Err(DockError::EmptyInput);
        }
        let node = self.node(id)?;
        let parent = node.parent();
        let events = Rc::clone(node.events());
        let splice_into = match parent {
            Some(parent) if self.node(parent)?.orientation() == orientation => Some(parent),
            _ => None,
        };

        if let Some(parent) = splice_into {
            let new = self.insert_host(tabs, events, Some(parent))?;
            if let Some(items) = self.node_mut(parent)?.items_mut() {
                let index = items
                    .iter()
                    .position(|child| *child == id)
                    .map_or(items.len(), |i| if before { i } else { i + 1 });
                items.insert(index, new);
            }
            tracing::debug!(layout = %new, parent = %parent, "Sibling spliced into parent");
            self.rebuild(parent);
            return Ok(new);
        }

        let new = self.insert_host(tabs, events, Some(id))?;
        let node = self.node(id)?;
        if node.for_layout() && node.orientation() != orientation {
            self.wrap_children(id, orientation)?;
        } else {
            self.convert_to_split(id, orientation)?;
        }
        if let Some(items) = self.node_mut(id)?.items_mut() {
            if before {
                items.insert(0, new);
            } else {
                items.push(new);
            }
        }
        tracing::debug!(layout = %new, target = %id, "Layout converted in place");
        self.rebuild(id);
        Ok(new)
    }

    /// Removes the direct child `child` from the split node `parent`.
    ///
    /// The removed subtree's visible tabs get `on_before_unmount` before the
    /// removal and `on_unmounted` after it. If one child is left, the split
    /// collapses: a remaining split is absorbed (its children and orientation
    /// move up), a remaining host turns `parent` into a tab host.
    ///
    /// Does nothing when `parent` is a tab host.
    ///
    /// # Errors
    ///
    /// - `DockError::UnknownLayout` if `parent` is not in this dock
    /// - `DockError::ChildNotFound` if `child` is not a direct child
    pub fn remove_layout(&mut self, parent: LayoutId, child: LayoutId) -> Result<(), DockError> {
        self.remove_child(parent, child, false)
    }

    fn remove_child(
        &mut self,
        parent: LayoutId,
        child: LayoutId,
        by_empty_group: bool,
    ) -> Result<(), DockError> {
        let _span = crate::trace_operation_debug!(
            span_names::LAYOUT_REMOVE,
            layout = %parent,
            child = %child,
            by_empty_group
        )
        .entered();

        let node = self.node(parent)?;
        if !node.for_layout() {
            return Ok(());
        }
        if !node.items().contains(&child) {
            return Err(DockError::ChildNotFound { parent, child });
        }

        if !by_empty_group {
            self.fire_subtree(child, TabHookPoint::BeforeUnmount);
        }
        if let Some(items) = self.node_mut(parent)?.items_mut() {
            items.retain(|item| *item != child);
        }
        let detached = self.detach_subtree(child);
        let still_present = self.settle(parent)?;

        if !by_empty_group {
            for layout in &detached {
                if let Some(group) = layout.group() {
                    group.fire_current(TabHookPoint::Unmounted);
                }
            }
        }
        if still_present {
            self.rebuild(parent);
        }
        tracing::debug!(
            layout = %parent,
            removed = detached.len(),
            "Child layout removed"
        );
        Ok(())
    }

    /// Restores the no-singleton rule on `id` after a child was removed.
    ///
    /// Returns false if `id` itself had to be removed from its parent.
    fn settle(&mut self, id: LayoutId) -> Result<bool, DockError> {
        let node = self.node(id)?;
        let grandparent = node.parent();
        match *node.items().to_vec().as_slice() {
            [] => match grandparent {
                Some(grandparent) => {
                    self.remove_child(grandparent, id, true)?;
                    return Ok(false);
                }
                None => {
                    let events = Rc::clone(node.events());
                    let group = TabGroup::new(Vec::new(), events)?;
                    self.node_mut(id)?.set_kind(LayoutKind::Host(group));
                }
            },
            [single] => {
                if self.node(single)?.for_layout() {
                    let absorbed = self
                        .nodes
                        .remove(&single)
                        .ok_or(DockError::UnknownLayout(single))?;
                    self.node_mut(id)?.set_kind(absorbed.into_kind());
                } else {
                    self.collapse_into_host(id)?;
                }
                self.update_parenthood(id, grandparent)?;
            }
            _ => {}
        }
        Ok(true)
    }

    /// Removes `id` and its descendants from the arena, in pre-order.
    fn detach_subtree(&mut self, id: LayoutId) -> Vec<Layout<V>> {
        let mut detached = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(&current) {
                stack.extend(node.items().iter().rev().copied());
                detached.push(node);
            }
        }
        detached
    }

    fn fire_subtree(&self, id: LayoutId, point: TabHookPoint) {
        for layout in self.descendants(id) {
            if let Some(group) = self.group(layout) {
                group.fire_current(point);
            }
        }
    }

    /// Called when the group hosted by `id` lost its last tab.
    ///
    /// Asks the parent to drop `id`. Does nothing for split nodes and for
    /// roots, which may keep an empty group.
    ///
    /// # Errors
    ///
    /// Returns `DockError::UnknownLayout` if the layout is not in this dock.
    pub fn on_tab_group_emptied(&mut self, id: LayoutId) -> Result<(), DockError> {
        let node = self.node(id)?;
        if node.for_layout() {
            return Ok(());
        }
        match node.parent() {
            Some(parent) => self.remove_child(parent, id, true),
            None => Ok(()),
        }
    }

    /// Sets the parent of `id` and repoints every descendant, and every
    /// hosted group, at its actual owner.
    ///
    /// # Errors
    ///
    /// Returns `DockError::UnknownLayout` if the layout is not in this dock.
    pub fn update_parenthood(
        &mut self,
        id: LayoutId,
        parent: Option<LayoutId>,
    ) -> Result<(), DockError> {
        self.node_mut(id)?.set_parent(parent);
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.nodes.get_mut(&current) else {
                continue;
            };
            if let Some(group) = node.group_mut() {
                group.set_parent(Some(current));
            }
            let children = node.items().to_vec();
            for child in children {
                if let Some(child_node) = self.nodes.get_mut(&child) {
                    child_node.set_parent(Some(current));
                }
                stack.push(child);
            }
        }
        Ok(())
    }

    // ========================================================================
    // Tab operations
    // ========================================================================

    /// Makes `tab` the active tab of the group hosted by `host`.
    ///
    /// Returns true if the active tab changed.
    ///
    /// # Errors
    ///
    /// - `DockError::UnknownLayout` if the layout is not in this dock
    /// - `DockError::NotTabHost` if the layout is a split node
    pub fn toggle_tab(&mut self, host: LayoutId, tab: &TabId) -> Result<bool, DockError> {
        let group = self.group_mut(host)?;
        let changed = group.toggle(tab);
        let commands = group.take_render_commands();
        self.commands.extend(commands);
        Ok(changed)
    }

    /// Adds `tab` to the group hosted by `host` and activates it.
    ///
    /// Returns the new number of tabs in the group.
    ///
    /// # Errors
    ///
    /// - `DockError::UnknownLayout` if the layout is not in this dock
    /// - `DockError::NotTabHost` if the layout is a split node
    /// - `DockError::DuplicateId` if the tab ID is already used in the dock
    pub fn add_tab(
        &mut self,
        host: LayoutId,
        tab: Tab<V>,
        position: Option<usize>,
    ) -> Result<usize, DockError> {
        let _span = crate::trace_operation_debug!(
            span_names::TAB_ADD,
            layout = %host,
            tab = %tab.id()
        )
        .entered();

        if self.node(host)?.group().is_none() {
            return Err(DockError::NotTabHost(host));
        }
        if self.contains_tab(tab.id()) {
            return Err(DockError::DuplicateId(tab.id().clone()));
        }
        let group = self.group_mut(host)?;
        let count = group.add(tab, position)?;
        let commands = group.take_render_commands();
        self.commands.extend(commands);
        Ok(count)
    }

    /// Removes `tab` from the group hosted by `host`.
    ///
    /// Removing the last tab of a non-root host removes the host from its
    /// parent, collapsing the parent if needed. Returns the number of tabs
    /// left in the group (0 when the host was removed).
    ///
    /// # Errors
    ///
    /// - `DockError::UnknownLayout` if the layout is not in this dock
    /// - `DockError::NotTabHost` if the layout is a split node
    pub fn remove_tab(&mut self, host: LayoutId, tab: &TabId) -> Result<usize, DockError> {
        let _span = crate::trace_operation_debug!(
            span_names::TAB_REMOVE,
            layout = %host,
            tab = %tab
        )
        .entered();

        self.take_tab(host, tab)?;
        Ok(self.group(host).map_or(0, TabGroup::len))
    }

    /// Removes `tab` from the group hosted by `host` and hands it back.
    pub(crate) fn take_tab(
        &mut self,
        host: LayoutId,
        tab: &TabId,
    ) -> Result<Option<Tab<V>>, DockError> {
        let node = self.node(host)?;
        let group = node.group().ok_or(DockError::NotTabHost(host))?;
        if !group.does_exist(tab) {
            return Ok(None);
        }
        let parent = node.parent();

        // The host leaves the arena while its group runs, so the emptied
        // notification can restructure the tree around it.
        let mut layout = self
            .nodes
            .remove(&host)
            .ok_or(DockError::UnknownLayout(host))?;
        let mut cascade = Ok(false);
        let taken = layout.group_mut().and_then(|group| {
            group.take_with(tab, |_| {
                cascade = match parent {
                    Some(parent) => self.remove_child(parent, host, true).map(|()| true),
                    None => Ok(false),
                };
            })
        });

        match cascade {
            Ok(true) => {
                tracing::debug!(
                    layout = %host,
                    tab = %tab,
                    "Emptied host removed from tree"
                );
            }
            Ok(false) => {
                if let Some(group) = layout.group_mut() {
                    let commands = group.take_render_commands();
                    self.commands.extend(commands);
                }
                self.nodes.insert(host, layout);
            }
            Err(err) => {
                self.nodes.insert(host, layout);
                return Err(err);
            }
        }
        Ok(taken)
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Renders the subtree at `id`.
    ///
    /// # Errors
    ///
    /// Returns `DockError::UnknownLayout` if the layout is not in this dock.
    pub fn render(&self, id: LayoutId) -> Result<LayoutView<V>, DockError> {
        self.view(id).ok_or(DockError::UnknownLayout(id))
    }

    fn view(&self, id: LayoutId) -> Option<LayoutView<V>> {
        let node = self.nodes.get(&id)?;
        Some(match node.kind() {
            LayoutKind::Split { orientation, items } => LayoutView::Split {
                id,
                orientation: *orientation,
                children: items.iter().filter_map(|child| self.view(*child)).collect(),
            },
            LayoutKind::Host(group) => LayoutView::Host {
                id,
                group: group.render(),
            },
        })
    }

    fn rebuild(&mut self, id: LayoutId) {
        if let Some(view) = self.view(id) {
            self.commands.push(RenderCommand::Rebuild { layout: id, view });
        }
    }

    /// Returns the queued render updates without draining them.
    pub fn pending_render_commands(&self) -> &[RenderCommand<V>] {
        &self.commands
    }

    /// Drains the queued render updates, oldest first.
    pub fn take_render_commands(&mut self) -> Vec<RenderCommand<V>> {
        std::mem::take(&mut self.commands)
    }
}

impl<V> Default for Dock<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for Dock<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dock")
            .field("nodes", &self.nodes)
            .field("events", &self.events)
            .field("pending_commands", &self.commands.len())
            .finish()
    }
}
