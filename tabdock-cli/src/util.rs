//! Shared utility functions used across command modules.

use std::path::{Path, PathBuf};

use tabdock_core::config::DockSettings;
use tabdock_core::dock::{
    Dock, DropPayload, Events, LayoutId, LayoutItem, LayoutOptions, Orientation, Tab, TabId,
};
use tabdock_core::error::TabdockResult;

use crate::error::CliError;

/// Content shown by every demo tab
pub const DEMO_CONTENT: &str = "Hello World";

/// Resolves the settings file path from the optional `--config` argument.
pub fn settings_path(config_path: Option<&Path>) -> Result<PathBuf, CliError> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(DockSettings::default_path()?),
    }
}

/// Loads settings from `--config`, or from the default location when it can
/// be determined. A missing file yields defaults.
pub fn load_settings(config_path: Option<&Path>) -> TabdockResult<DockSettings> {
    match config_path {
        Some(path) => Ok(DockSettings::load_from(path)?),
        None => match DockSettings::default_path() {
            Ok(path) => Ok(DockSettings::load_from(&path)?),
            Err(e) => {
                tracing::debug!(error = %e, "No settings location, using defaults");
                Ok(DockSettings::default())
            }
        },
    }
}

/// A dock with the single root every command works on
pub struct Session {
    /// The layout tree
    pub dock: Dock<String>,
    /// Its root; collapses keep this ID stable
    pub root: LayoutId,
}

impl Session {
    /// Builds the demo tree:
    ///
    /// ```text
    /// root
    /// ├── host [0]
    /// └── column
    ///     ├── host [1]
    ///     └── wrapper
    ///         └── inner
    ///             ├── host [2]
    ///             └── host [3]
    /// ```
    ///
    /// Splits without an explicit orientation use the configured default.
    /// The root resolves unknown drops into new tabs titled after the
    /// payload's `title` field.
    pub fn demo(settings: &DockSettings) -> TabdockResult<Self> {
        let default_orientation = settings.layout.default_orientation;
        let mut dock = Dock::new();

        let first = dock.create_host(vec![demo_tab("0")])?;
        let second = dock.create_host(vec![demo_tab("1")])?;
        let third = dock.create_host(vec![demo_tab("2")])?;
        let fourth = dock.create_host(vec![demo_tab("3")])?;
        let inner = dock.create_split(vec![third, fourth], default_orientation)?;
        let wrapper = dock.create_split(vec![inner], default_orientation)?;
        let column = dock.create_split(vec![second, wrapper], Orientation::Column)?;

        let events = Events::new().on_unknown_dropped(|payload: &DropPayload| {
            let id = payload.id()?;
            let title = payload.get_str("title").unwrap_or(id).to_owned();
            Some(Tab::new(id, title, || DEMO_CONTENT.to_owned()))
        });
        let root = dock.create_layout(
            vec![LayoutItem::Layout(first), LayoutItem::Layout(column)],
            LayoutOptions::new()
                .with_orientation(default_orientation)
                .with_events(events),
        )?;

        tracing::debug!(layout = %root, "Demo layout built");
        Ok(Self { dock, root })
    }

    /// Returns the host currently holding `tab`.
    pub fn host_of(&self, tab: &str) -> Option<LayoutId> {
        self.dock
            .find_tab(self.root, &TabId::from(tab))
            .map(|found| found.layout)
    }
}

/// Builds a demo tab titled after its ID
pub fn demo_tab(id: &str) -> Tab<String> {
    Tab::new(id, id, || DEMO_CONTENT.to_owned())
}
