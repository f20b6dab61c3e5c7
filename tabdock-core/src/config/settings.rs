//! Dock settings
//!
//! Settings are stored as TOML. Every field has a default, so a partial file
//! (or none at all) is valid.
//!
//! ```toml
//! [drop]
//! edge_ratio = 0.25
//!
//! [layout]
//! default_orientation = "column"
//!
//! [logging]
//! level = "debug"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dock::Orientation;
use crate::drag_drop::DropZoneConfig;
use crate::error::{ConfigError, ConfigResult};
use crate::tracing::{TracingConfig, TracingLevel, span_names};

/// Settings file name inside the configuration directory
pub const SETTINGS_FILE: &str = "settings.toml";

/// Application directory name under the platform configuration directory
pub const APP_DIR: &str = "tabdock";

/// Drop zone classification settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropSettings {
    /// Fraction of a host's width or height covered by each edge band
    pub edge_ratio: f64,
}

impl Default for DropSettings {
    fn default() -> Self {
        Self {
            edge_ratio: DropZoneConfig::DEFAULT_EDGE_RATIO,
        }
    }
}

/// Layout construction settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Orientation used for splits built without an explicit one
    pub default_orientation: Orientation,
}

/// Logging settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Minimum level for `tabdock` targets
    pub level: TracingLevel,
    /// Raw `EnvFilter` directive overriding `level`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

/// All user-tunable settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockSettings {
    /// Drop zone classification
    pub drop: DropSettings,
    /// Layout construction
    pub layout: LayoutSettings,
    /// Logging
    pub logging: LoggingSettings,
}

impl DockSettings {
    /// Parses and validates settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::Invalid` for out-of-range values.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serializes the settings to TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if serialization fails.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Loads settings from `path`. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file exists but cannot be read, or
    /// any error of [`DockSettings::from_toml_str`].
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let _span = crate::trace_operation_debug!(span_names::CONFIG_LOAD, path = %path.display())
            .entered();

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No settings file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::from_toml_str(&content)
    }

    /// Writes the settings to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` on filesystem failures.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        let _span = crate::trace_operation_debug!(span_names::CONFIG_SAVE, path = %path.display())
            .entered();

        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(io_error)?;
        tracing::info!(path = %path.display(), "Settings saved");
        Ok(())
    }

    /// Returns the default settings path (`<config dir>/tabdock/settings.toml`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` if the platform has no
    /// configuration directory.
    pub fn default_path() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending key.
    pub fn validate(&self) -> ConfigResult<()> {
        let ratio = self.drop.edge_ratio;
        if !(ratio > 0.0 && ratio <= 0.5) {
            return Err(ConfigError::Invalid {
                key: "drop.edge_ratio".to_string(),
                reason: format!("{ratio} is outside (0, 0.5]"),
            });
        }
        if let Some(filter) = &self.logging.filter
            && filter.trim().is_empty()
        {
            return Err(ConfigError::Invalid {
                key: "logging.filter".to_string(),
                reason: "filter is empty".to_string(),
            });
        }
        Ok(())
    }

    /// Builds the drop zone classifier configuration.
    #[must_use]
    pub const fn to_drop_config(&self) -> DropZoneConfig {
        DropZoneConfig {
            edge_ratio: self.drop.edge_ratio,
        }
    }

    /// Builds the tracing configuration, raising the level by `verbosity`.
    #[must_use]
    pub fn to_tracing_config(&self, verbosity: u8) -> TracingConfig {
        let config = TracingConfig::new().with_level(self.logging.level.raised_by(verbosity));
        match &self.logging.filter {
            Some(filter) if verbosity == 0 => config.with_filter(filter.clone()),
            _ => config,
        }
    }
}
