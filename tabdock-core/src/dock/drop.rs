//! Drop routing
//!
//! A drag starts on a tab selector, which writes [`DropPayload::for_tab`]
//! into the drag data. When the pointer is released over a tab host, the
//! host classifies the position into a [`DropZone`] and calls
//! [`Dock::on_drop`] with the raw data.

use std::fmt;
use std::rc::Rc;

use serde_json::{Map, Value};

use super::error::{DockError, DropOutcome};
use super::tab::Tab;
use super::tree::Dock;
use super::types::{LayoutId, Orientation, TabId};
use crate::drag_drop::DropZone;
use crate::tracing::span_names;

/// Marker stored under `__symbol__` by tab selectors.
pub const TAB_SYMBOL: &str = "tab";

/// Parsed drag data.
///
/// Holds the JSON object written at drag start. Only `id` is interpreted;
/// every other field is kept for the unknown-drop resolver.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropPayload {
    fields: Map<String, Value>,
}

impl DropPayload {
    /// Parses raw drag data. Malformed input yields an empty payload.
    #[must_use]
    pub fn parse(data: &str) -> Self {
        match serde_json::from_str::<Value>(data) {
            Ok(Value::Object(fields)) => Self { fields },
            _ => {
                tracing::trace!(len = data.len(), "Drop data is not a JSON object");
                Self::default()
            }
        }
    }

    /// Builds the payload a tab selector writes when a drag starts.
    #[must_use]
    pub fn for_tab(tab: &TabId) -> Self {
        let mut fields = Map::new();
        fields.insert("id".to_owned(), Value::String(tab.to_string()));
        fields.insert("__symbol__".to_owned(), Value::String(TAB_SYMBOL.to_owned()));
        Self { fields }
    }

    /// Returns the dragged tab ID, if present and a string.
    pub fn id(&self) -> Option<&str> {
        self.get_str("id")
    }

    /// Returns a raw field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns a string field.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Returns all fields.
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Returns true if the payload was written by a tab selector.
    pub fn is_tab(&self) -> bool {
        self.get_str("__symbol__") == Some(TAB_SYMBOL)
    }

    /// Serializes the payload back to drag data.
    pub fn to_json(&self) -> String {
        Value::Object(self.fields.clone()).to_string()
    }
}

impl fmt::Display for DropPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

impl<V> Dock<V> {
    /// Routes a drop onto the tab host `target`.
    ///
    /// The dragged tab is looked up in the whole tree containing `target`.
    /// If it is unknown, the target's `on_unknown_dropped` resolver may
    /// supply one; otherwise nothing happens. Dropping a group's only tab
    /// back onto that group does nothing. Otherwise the tab is removed from
    /// its origin group (which may collapse the tree around it) and then:
    ///
    /// - `Center`: added to the target group and activated
    /// - `Left` / `Right`: placed in a new host before / after the target, in a row
    /// - `Top` / `Bottom`: placed in a new host before / after the target, in a column
    ///
    /// Drops onto split nodes are ignored.
    ///
    /// # Errors
    ///
    /// - `DockError::UnknownLayout` if `target` is not in this dock
    /// - `DockError::DuplicateId` if a resolved tab reuses an ID of the dock
    pub fn on_drop(
        &mut self,
        target: LayoutId,
        zone: DropZone,
        data: &str,
    ) -> Result<DropOutcome, DockError> {
        let _span = crate::trace_operation!(span_names::DROP, layout = %target, zone = %zone).entered();

        let payload = DropPayload::parse(data);
        let node = self.layout(target).ok_or(DockError::UnknownLayout(target))?;
        let Some(group) = node.group() else {
            tracing::debug!(layout = %target, "Drop onto split node ignored");
            return Ok(DropOutcome::Ignored);
        };
        let target_group = group.id();
        let target_len = group.len();
        let events = Rc::clone(node.events());

        let root = self.upmost_parent(target)?;
        let origin = payload
            .id()
            .and_then(|id| self.find_tab(root, &TabId::from(id)))
            .map(|found| (found.layout, found.group.id(), found.tab.id().clone()));

        let tab: Tab<V> = match origin {
            Some((_, group, _)) if group == target_group && target_len == 1 => {
                tracing::debug!(layout = %target, "Tab dropped onto its own group");
                return Ok(DropOutcome::SelfDrop);
            }
            Some((host, _, id)) => match self.take_tab(host, &id)? {
                Some(tab) => tab,
                None => return Ok(DropOutcome::Ignored),
            },
            None => match events.resolve_unknown(&payload) {
                Some(tab) => tab,
                None => {
                    tracing::debug!(payload = %payload, "Unknown drop not resolved");
                    return Ok(DropOutcome::Ignored);
                }
            },
        };

        // Removing the tab may have collapsed the target's parent into a
        // different node; the group keeps its identity.
        let host = self
            .host_of_group(target_group)
            .ok_or(DockError::UnknownLayout(target))?;
        let id = tab.id().clone();

        let outcome = match zone {
            DropZone::Center => {
                self.add_tab(host, tab, None)?;
                DropOutcome::Added {
                    group: target_group,
                    tab: id,
                }
            }
            DropZone::Left | DropZone::Right | DropZone::Top | DropZone::Bottom => {
                let before = matches!(zone, DropZone::Left | DropZone::Top);
                let orientation = if matches!(zone, DropZone::Left | DropZone::Right) {
                    Orientation::Row
                } else {
                    Orientation::Column
                };
                let layout = self.add_layout(host, vec![tab], before, orientation)?;
                DropOutcome::Split { layout, tab: id }
            }
        };

        tracing::info!(layout = %host, zone = %zone, tab = ?outcome.tab(), "Tab dropped");
        Ok(outcome)
    }
}
