//! Core type definitions for the dock tree
//!
//! This module contains the identifier types and the orientation enum used
//! throughout the layout engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a layout node.
///
/// Generated by the engine when a layout is created and stable for as long
/// as the node stays in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutId(pub Uuid);

impl LayoutId {
    /// Creates a new random layout ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LayoutId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Layout({})", self.0)
    }
}

/// Unique identifier for a tab group.
///
/// A group keeps its ID when it moves between host layouts, which happens
/// whenever a host is split or a split collapses back into a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub Uuid);

impl GroupId {
    /// Creates a new random group ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GroupId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Group({})", self.0)
    }
}

/// Identifier of a tab.
///
/// Tab IDs are chosen by the hosting application and are opaque to the
/// engine. They travel inside drag payloads as plain strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(String);

impl TabId {
    /// Creates a tab ID from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TabId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for TabId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Arrangement of the children of a split node.
///
/// A row places children side by side (left to right), a column stacks them
/// (top to bottom). Tab hosts have no orientation of their own and report
/// `Row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Children laid out horizontally.
    #[default]
    Row,
    /// Children laid out vertically.
    Column,
}

impl Orientation {
    /// Maps the `is_row` flag to an orientation.
    #[must_use]
    pub const fn from_row(is_row: bool) -> Self {
        if is_row { Self::Row } else { Self::Column }
    }

    /// Returns true for `Row`.
    #[must_use]
    pub const fn is_row(self) -> bool {
        matches!(self, Self::Row)
    }

    /// Returns the other orientation.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Row => Self::Column,
            Self::Column => Self::Row,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => write!(f, "row"),
            Self::Column => write!(f, "column"),
        }
    }
}

impl FromStr for Orientation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "row" | "horizontal" => Ok(Self::Row),
            "column" | "col" | "vertical" => Ok(Self::Column),
            _ => Err(()),
        }
    }
}
