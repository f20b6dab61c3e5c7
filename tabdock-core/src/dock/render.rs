//! Rendering boundary
//!
//! The engine does not draw anything. It describes what should be on
//! screen as plain view values ([`LayoutView`], [`GroupView`]) and queues
//! incremental updates as [`RenderCommand`]s that the host drains and
//! applies to its own widgets.

use super::tab::Tab;
use super::types::{GroupId, LayoutId, Orientation, TabId};

/// Returns the element ID of a tab's selector button.
#[must_use]
pub fn selector_element_id(tab: &TabId) -> String {
    format!("tab-group-btn-{tab}")
}

/// One entry of a group's navigation strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSelectorView {
    /// The tab this selector switches to.
    pub tab: TabId,
    /// Display title.
    pub title: String,
    /// Whether the tab is the active one.
    pub active: bool,
    /// Element ID of the selector (`tab-group-btn-{id}`).
    pub element_id: String,
}

impl TabSelectorView {
    /// Builds the selector for `tab`.
    pub fn new<V>(tab: &Tab<V>, active: bool) -> Self {
        Self {
            tab: tab.id().clone(),
            title: tab.title().to_owned(),
            active,
            element_id: selector_element_id(tab.id()),
        }
    }
}

/// A rendered tab group: navigation strip plus the active tab's content.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupView<V> {
    /// The group being shown.
    pub id: GroupId,
    /// One selector per tab, in display order.
    pub selectors: Vec<TabSelectorView>,
    /// Freshly produced content of the active tab.
    pub content: Option<V>,
}

impl<V> GroupView<V> {
    /// Returns the selector marked active, if any.
    pub fn active_selector(&self) -> Option<&TabSelectorView> {
        self.selectors.iter().find(|s| s.active)
    }
}

/// A rendered layout subtree.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutView<V> {
    /// A split container with its children in order.
    Split {
        /// The split node.
        id: LayoutId,
        /// Arrangement of the children.
        orientation: Orientation,
        /// Rendered children.
        children: Vec<LayoutView<V>>,
    },
    /// A tab host with its group.
    Host {
        /// The host node.
        id: LayoutId,
        /// The rendered group.
        group: GroupView<V>,
    },
}

impl<V> LayoutView<V> {
    /// Returns the ID of the rendered layout.
    pub const fn id(&self) -> LayoutId {
        match self {
            Self::Split { id, .. } | Self::Host { id, .. } => *id,
        }
    }

    /// Only tab hosts react to drag-over and drop.
    pub const fn accepts_drops(&self) -> bool {
        matches!(self, Self::Host { .. })
    }

    /// Returns the number of host views in this subtree.
    pub fn host_count(&self) -> usize {
        match self {
            Self::Host { .. } => 1,
            Self::Split { children, .. } => children.iter().map(Self::host_count).sum(),
        }
    }
}

/// An incremental update for the host to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand<V> {
    /// Replace the previously rendered output of `layout` with `view`.
    Rebuild {
        /// The layout whose output is replaced.
        layout: LayoutId,
        /// The new output.
        view: LayoutView<V>,
    },
    /// Replace a group's content area with a tab's fresh content.
    ReplaceContent {
        /// The group whose content changes.
        group: GroupId,
        /// The tab now shown.
        tab: TabId,
        /// The tab's content.
        content: V,
    },
    /// Clear a group's content area.
    ClearContent {
        /// The group that became empty.
        group: GroupId,
    },
    /// Flip the active marker of a selector.
    SetSelectorActive {
        /// The group owning the selector.
        group: GroupId,
        /// The selector's tab.
        tab: TabId,
        /// New active state.
        active: bool,
    },
    /// Insert a selector into a group's navigation strip.
    InsertSelector {
        /// The group receiving the selector.
        group: GroupId,
        /// Position in the strip.
        index: usize,
        /// The new selector.
        selector: TabSelectorView,
    },
    /// Remove a selector from a group's navigation strip.
    RemoveSelector {
        /// The group owning the selector.
        group: GroupId,
        /// The selector's tab.
        tab: TabId,
    },
}
