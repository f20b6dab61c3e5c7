//! `Tabdock` Core Library
//!
//! This crate provides the layout engine of a tabbed docking UI: tab groups
//! nested into rows and columns, rearranged by dragging tabs onto the edges
//! or the center of other groups, with the tree collapsing itself as groups
//! empty out.
//!
//! # Crate Structure
//!
//! - [`dock`] - Layout tree, tab groups, lifecycle hooks, drop routing and the render boundary
//! - [`drag_drop`] - Drop zone classification from pointer geometry
//! - [`config`] - User settings and persistence
//! - [`tracing`] - Logging setup, span names and macros
//! - [`error`] - Crate-level error types

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod config;
pub mod dock;
pub mod drag_drop;
pub mod error;
pub mod tracing;

// =============================================================================
// Convenience re-exports
// =============================================================================

pub use config::{DockSettings, DropSettings, LayoutSettings, LoggingSettings};
pub use dock::{
    Dock, DockError, DropOutcome, DropPayload, Events, GroupEvent, GroupId, GroupView, Layout,
    LayoutId, LayoutItem, LayoutKind, LayoutOptions, LayoutView, Orientation, RenderCommand, Tab,
    TabGroup, TabHookPoint, TabId, TabMatch, TabSelectorView,
};
pub use drag_drop::{DropZone, DropZoneConfig, ZoneClassifier, classify_drop_zone};
pub use error::{ConfigError, ConfigResult, TabdockError, TabdockResult};
pub use crate::tracing::{
    TracingConfig, TracingError, TracingLevel, TracingOutput, TracingResult, init_tracing,
    is_tracing_initialized,
};
