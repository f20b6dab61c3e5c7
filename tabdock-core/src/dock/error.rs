//! Error types for dock tree operations
//!
//! This module defines the error type and the drop outcome enum used
//! throughout the layout engine.

use super::types::{GroupId, LayoutId, TabId};

/// Errors that can occur during dock tree operations.
///
/// Every variant is a precondition violation by the caller. Conditions the
/// engine treats as harmless (toggling to the active tab, removing a tab
/// that is not there) are successful no-ops and never produce an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DockError {
    /// A layout was built from a list mixing tabs and layouts.
    #[error("cannot mix tabs and layouts in one layout")]
    MixedContent,

    /// A layout or a new sibling segment was requested with no content.
    #[error("cannot build a layout from an empty list")]
    EmptyInput,

    /// A split node was turned into a tab host without exactly one child.
    #[error("cannot turn {layout} into a tab group: it has {children} children, expected 1")]
    InvalidTransition {
        /// The layout the transition was requested on.
        layout: LayoutId,
        /// Number of children it currently has.
        children: usize,
    },

    /// A tab with the same ID already exists.
    #[error("tab already exists: {0}")]
    DuplicateId(TabId),

    /// The given layout is not a direct child of the split node.
    #[error("{child} is not a child of {parent}")]
    ChildNotFound {
        /// The split node searched.
        parent: LayoutId,
        /// The ID that was not found among its children.
        child: LayoutId,
    },

    /// The layout is not part of this dock.
    #[error("layout not found: {0}")]
    UnknownLayout(LayoutId),

    /// The layout already belongs to another split node.
    #[error("{0} already has a parent")]
    AlreadyAttached(LayoutId),

    /// The operation needs a tab host but the layout is a split node.
    #[error("{0} does not host a tab group")]
    NotTabHost(LayoutId),
}

/// Result of routing a drop onto a tab host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// No tab could be resolved from the payload, or the target does not
    /// accept drops. The tree is unchanged.
    Ignored,
    /// The tab was dropped onto the group that holds it as its only tab.
    /// The tree is unchanged.
    SelfDrop,
    /// The tab was added to the target group.
    Added {
        /// The group that received the tab.
        group: GroupId,
        /// The dropped tab.
        tab: TabId,
    },
    /// A new tab host was created next to the target.
    Split {
        /// The newly created host layout.
        layout: LayoutId,
        /// The dropped tab.
        tab: TabId,
    },
}

impl DropOutcome {
    /// Returns true if the drop changed the tree.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Added { .. } | Self::Split { .. })
    }

    /// Returns the dropped tab ID, if the drop was applied.
    #[must_use]
    pub const fn tab(&self) -> Option<&TabId> {
        match self {
            Self::Ignored | Self::SelfDrop => None,
            Self::Added { tab, .. } | Self::Split { tab, .. } => Some(tab),
        }
    }
}
