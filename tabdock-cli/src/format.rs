//! Output formatting for rendered layout trees.

use std::fmt::Write as _;

use serde::Serialize;
use tabdock_core::dock::{GroupView, LayoutView, Orientation};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// JSON snapshot of a rendered layout node
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NodeSnapshot {
    /// A split container
    Split {
        /// Child arrangement
        orientation: Orientation,
        /// Children in order
        children: Vec<NodeSnapshot>,
    },
    /// A tab host
    Host {
        /// Selectors in display order
        tabs: Vec<TabSnapshot>,
        /// Active tab ID
        #[serde(skip_serializing_if = "Option::is_none")]
        active: Option<String>,
        /// Content of the active tab
        #[serde(skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
}

/// JSON snapshot of one tab selector
#[derive(Debug, Serialize)]
pub struct TabSnapshot {
    /// Tab ID
    pub id: String,
    /// Display title
    pub title: String,
}

impl From<&LayoutView<String>> for NodeSnapshot {
    fn from(view: &LayoutView<String>) -> Self {
        match view {
            LayoutView::Split {
                orientation,
                children,
                ..
            } => Self::Split {
                orientation: *orientation,
                children: children.iter().map(Self::from).collect(),
            },
            LayoutView::Host { group, .. } => Self::Host {
                tabs: group
                    .selectors
                    .iter()
                    .map(|s| TabSnapshot {
                        id: s.tab.to_string(),
                        title: s.title.clone(),
                    })
                    .collect(),
                active: group.active_selector().map(|s| s.tab.to_string()),
                content: group.content.clone(),
            },
        }
    }
}

/// Formats a rendered tree in the requested format
pub fn format_tree(view: &LayoutView<String>, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(format_text(view)),
        OutputFormat::Json => format_json(view).map(|json| json + "\n"),
    }
}

/// Formats a rendered tree as an indented outline.
///
/// Splits print their orientation, hosts their tabs with the active one
/// marked by `*`:
///
/// ```text
/// row
///   host [0*]
///   column
///     host [1, 4*]
///     host [2*]
/// ```
#[must_use]
pub fn format_text(view: &LayoutView<String>) -> String {
    let mut output = String::new();
    let mut stack = vec![(view, 0usize)];
    while let Some((node, depth)) = stack.pop() {
        let indent = "  ".repeat(depth);
        match node {
            LayoutView::Split {
                orientation,
                children,
                ..
            } => {
                let _ = writeln!(output, "{indent}{orientation}");
                stack.extend(children.iter().rev().map(|child| (child, depth + 1)));
            }
            LayoutView::Host { group, .. } => {
                let _ = writeln!(output, "{indent}host [{}]", host_tabs(group));
            }
        }
    }
    output
}

fn host_tabs(group: &GroupView<String>) -> String {
    group
        .selectors
        .iter()
        .map(|s| {
            if s.active {
                format!("{}*", s.tab)
            } else {
                s.tab.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats a rendered tree as pretty-printed JSON
pub fn format_json(view: &LayoutView<String>) -> Result<String, CliError> {
    serde_json::to_string_pretty(&NodeSnapshot::from(view))
        .map_err(|e| CliError::Output(format!("Failed to serialize layout: {e}")))
}
