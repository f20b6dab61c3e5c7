//! Error types for `Tabdock`
//!
//! Each concern has its own error enum; [`TabdockError`] wraps them for
//! callers that drive several concerns at once.

use std::path::PathBuf;

use thiserror::Error;

use crate::dock::DockError;
use crate::tracing::TracingError;

/// Errors raised while loading, saving or validating settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the settings file failed
    #[error("Failed to access {path}: {source}")]
    Io {
        /// The settings file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for the settings schema
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// The settings could not be serialized
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A setting is out of range
    #[error("Invalid setting {key}: {reason}")]
    Invalid {
        /// Dotted key of the offending setting
        key: String,
        /// What is wrong with it
        reason: String,
    },

    /// No configuration directory could be determined
    #[error("Could not determine the configuration directory")]
    NoConfigDir,
}

/// Result type for settings operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error for the crate
#[derive(Debug, Error)]
pub enum TabdockError {
    /// Layout tree misuse
    #[error(transparent)]
    Dock(#[from] DockError),

    /// Settings failure
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Logging setup failure
    #[error(transparent)]
    Tracing(#[from] TracingError),
}

/// Result type for crate-level operations
pub type TabdockResult<T> = Result<T, TabdockError>;
