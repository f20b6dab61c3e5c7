//! Layout nodes
//!
//! A [`Layout`] is either a split container or a tab host:
//!
//! ```text
//! Split(Row)
//! ├── Host(group: [a, b])
//! └── Split(Column)
//!     ├── Host(group: [c])
//!     └── Host(group: [d])
//! ```
//!
//! Nodes live in the arena of a [`Dock`](super::Dock). Children are
//! referenced by [`LayoutId`] and the `parent` field is a plain key into the
//! same arena, so the only owner of a node is the dock itself.

use std::fmt;
use std::rc::Rc;

use super::events::Events;
use super::tab::Tab;
use super::tab_group::TabGroup;
use super::types::{LayoutId, Orientation};

/// The two shapes a layout node can take.
pub enum LayoutKind<V> {
    /// A container arranging child layouts in a row or column.
    Split {
        /// Arrangement of the children.
        orientation: Orientation,
        /// Child layouts in display order.
        items: Vec<LayoutId>,
    },
    /// A node owning exactly one tab group.
    Host(TabGroup<V>),
}

/// A node of the layout tree.
pub struct Layout<V> {
    id: LayoutId,
    parent: Option<LayoutId>,
    kind: LayoutKind<V>,
    events: Rc<Events<V>>,
}

impl<V> Layout<V> {
    pub(crate) fn host(id: LayoutId, mut group: TabGroup<V>, events: Rc<Events<V>>) -> Self {
        group.set_parent(Some(id));
        Self {
            id,
            parent: None,
            kind: LayoutKind::Host(group),
            events,
        }
    }

    pub(crate) fn split(
        id: LayoutId,
        orientation: Orientation,
        items: Vec<LayoutId>,
        events: Rc<Events<V>>,
    ) -> Self {
        Self {
            id,
            parent: None,
            kind: LayoutKind::Split { orientation, items },
            events,
        }
    }

    /// Returns the layout ID.
    pub const fn id(&self) -> LayoutId {
        self.id
    }

    /// Returns the parent layout, or `None` for a root.
    pub const fn parent(&self) -> Option<LayoutId> {
        self.parent
    }

    /// Returns the node shape.
    pub const fn kind(&self) -> &LayoutKind<V> {
        &self.kind
    }

    /// Returns true for a split container.
    pub const fn for_layout(&self) -> bool {
        matches!(self.kind, LayoutKind::Split { .. })
    }

    /// Returns true for a tab host.
    pub const fn is_host(&self) -> bool {
        matches!(self.kind, LayoutKind::Host(_))
    }

    /// Returns the orientation of a split, or `Row` for a host.
    pub const fn orientation(&self) -> Orientation {
        match &self.kind {
            LayoutKind::Split { orientation, .. } => *orientation,
            LayoutKind::Host(_) => Orientation::Row,
        }
    }

    /// Returns true if children are laid out horizontally.
    pub const fn is_row(&self) -> bool {
        self.orientation().is_row()
    }

    /// Returns the children of a split, or an empty slice for a host.
    pub fn items(&self) -> &[LayoutId] {
        match &self.kind {
            LayoutKind::Split { items, .. } => items,
            LayoutKind::Host(_) => &[],
        }
    }

    /// Returns the hosted group.
    pub const fn group(&self) -> Option<&TabGroup<V>> {
        match &self.kind {
            LayoutKind::Host(group) => Some(group),
            LayoutKind::Split { .. } => None,
        }
    }

    /// Returns the callback table of this node.
    pub fn events(&self) -> &Rc<Events<V>> {
        &self.events
    }

    pub(crate) fn group_mut(&mut self) -> Option<&mut TabGroup<V>> {
        match &mut self.kind {
            LayoutKind::Host(group) => Some(group),
            LayoutKind::Split { .. } => None,
        }
    }

    pub(crate) fn items_mut(&mut self) -> Option<&mut Vec<LayoutId>> {
        match &mut self.kind {
            LayoutKind::Split { items, .. } => Some(items),
            LayoutKind::Host(_) => None,
        }
    }

    pub(crate) fn orientation_mut(&mut self) -> Option<&mut Orientation> {
        match &mut self.kind {
            LayoutKind::Split { orientation, .. } => Some(orientation),
            LayoutKind::Host(_) => None,
        }
    }

    pub(crate) fn into_kind(self) -> LayoutKind<V> {
        self.kind
    }

    pub(crate) fn set_parent(&mut self, parent: Option<LayoutId>) {
        self.parent = parent;
    }

    pub(crate) fn set_kind(&mut self, kind: LayoutKind<V>) -> LayoutKind<V> {
        let old = std::mem::replace(&mut self.kind, kind);
        if let LayoutKind::Host(group) = &mut self.kind {
            group.set_parent(Some(self.id));
        }
        old
    }

    pub(crate) fn set_events(&mut self, events: Rc<Events<V>>) {
        if let LayoutKind::Host(group) = &mut self.kind {
            group.set_events(Rc::clone(&events));
        }
        self.events = events;
    }
}

impl<V> fmt::Debug for Layout<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Layout");
        s.field("id", &self.id).field("parent", &self.parent);
        match &self.kind {
            LayoutKind::Split { orientation, items } => {
                s.field("orientation", orientation).field("items", items);
            }
            LayoutKind::Host(group) => {
                s.field("group", group);
            }
        }
        s.finish_non_exhaustive()
    }
}

/// One element of the list a layout is built from.
pub enum LayoutItem<V> {
    /// A tab for a new tab host.
    Tab(Tab<V>),
    /// An existing root layout to become a child of a new split.
    Layout(LayoutId),
}

impl<V> From<Tab<V>> for LayoutItem<V> {
    fn from(tab: Tab<V>) -> Self {
        Self::Tab(tab)
    }
}

impl<V> From<LayoutId> for LayoutItem<V> {
    fn from(id: LayoutId) -> Self {
        Self::Layout(id)
    }
}

/// Options accepted when building a layout.
pub struct LayoutOptions<V> {
    /// Arrangement of the children of a split. Ignored for tab hosts.
    pub orientation: Orientation,
    /// Callback table for the new node. When set it is also pushed down to
    /// every descendant; otherwise the node uses the dock's default table.
    pub events: Option<Rc<Events<V>>>,
}

impl<V> LayoutOptions<V> {
    /// Creates row-oriented options without a callback table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            orientation: Orientation::Row,
            events: None,
        }
    }

    /// Sets the orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the orientation from an `is_row` flag.
    #[must_use]
    pub fn row(self, is_row: bool) -> Self {
        self.with_orientation(Orientation::from_row(is_row))
    }

    /// Sets the callback table.
    #[must_use]
    pub fn with_events(mut self, events: Events<V>) -> Self {
        self.events = Some(Rc::new(events));
        self
    }

    /// Sets an already shared callback table.
    #[must_use]
    pub fn with_shared_events(mut self, events: Rc<Events<V>>) -> Self {
        self.events = Some(events);
        self
    }
}

impl<V> Default for LayoutOptions<V> {
    fn default() -> Self {
        Self::new()
    }
}
