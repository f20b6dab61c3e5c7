//! Docking layout engine
//!
//! This module provides the tree model behind a tabbed docking UI: tab
//! groups hosted by layout nodes, nested into rows and columns, rearranged
//! by dragging tabs onto the edges or the center of other groups.
//!
//! # Architecture
//!
//! - **Arena-owned tree**: A [`Dock`] owns every [`Layout`]; children and
//!   parents are [`LayoutId`] keys, so there is a single owner per node
//! - **Two node shapes**: A layout is either a split (row or column of child
//!   layouts) or a host owning exactly one [`TabGroup`]
//! - **Self-healing structure**: Emptying a group or removing a child collapses
//!   redundant single-child splits before control returns to the caller
//! - **Ordered hooks**: Tab lifecycle hooks and group events fire in a fixed,
//!   tested order
//! - **Render boundary**: The engine produces view values and queued
//!   [`RenderCommand`]s; drawing is left to the host toolkit
//!
//! # Module Structure
//!
//! - `types` - Identifiers and orientation (`LayoutId`, `GroupId`, `TabId`, `Orientation`)
//! - `tab` - Tab descriptor and lifecycle hooks (`Tab`, `TabHookPoint`)
//! - `tab_group` - Ordered tabs with one active tab (`TabGroup`)
//! - `events` - Shared group callbacks (`Events`, `GroupEvent`)
//! - `layout` - Layout nodes (`Layout`, `LayoutKind`, `LayoutItem`, `LayoutOptions`)
//! - `tree` - The arena and structural operations (`Dock`, `TabMatch`)
//! - `drop` - Drag data and drop routing (`DropPayload`, `Dock::on_drop`)
//! - `render` - View model and render commands
//! - `error` - Error types (`DockError`, `DropOutcome`)
//!
//! # Example
//!
//! ```
//! use tabdock_core::dock::{Dock, DropOutcome, DropPayload, Orientation, Tab, TabId};
//! use tabdock_core::drag_drop::DropZone;
//!
//! let mut dock: Dock<String> = Dock::new();
//! let left = dock
//!     .create_host(vec![
//!         Tab::new("a", "Alpha", || "alpha".to_string()),
//!         Tab::new("b", "Beta", || "beta".to_string()),
//!     ])
//!     .unwrap();
//! let right = dock
//!     .create_host(vec![Tab::new("c", "Gamma", || "gamma".to_string())])
//!     .unwrap();
//! let root = dock.create_split(vec![left, right], Orientation::Row).unwrap();
//!
//! // Drag "b" onto the bottom edge of the right group
//! let data = DropPayload::for_tab(&TabId::from("b")).to_json();
//! let outcome = dock.on_drop(right, DropZone::Bottom, &data).unwrap();
//! assert!(matches!(outcome, DropOutcome::Split { .. }));
//!
//! // The right host became a column holding [c] above [b]
//! assert!(dock.layout(right).unwrap().for_layout());
//! assert_eq!(dock.tab_ids(root).len(), 3);
//! ```

mod drop;
mod error;
mod events;
mod layout;
mod render;
mod tab;
mod tab_group;
mod tree;
mod types;

pub use drop::{DropPayload, TAB_SYMBOL};
pub use error::{DockError, DropOutcome};
pub use events::{Events, GroupCallback, GroupEvent, UnknownDropResolver};
pub use layout::{Layout, LayoutItem, LayoutKind, LayoutOptions};
pub use render::{
    GroupView, LayoutView, RenderCommand, TabSelectorView, selector_element_id,
};
pub use tab::{ContentFactory, Tab, TabHook, TabHookPoint};
pub use tab_group::TabGroup;
pub use tree::{Dock, TabMatch};
pub use types::{GroupId, LayoutId, Orientation, TabId};
