//! CLI error types and exit codes.

use tabdock_core::dock::DockError;
use tabdock_core::error::{ConfigError, TabdockError};
use tabdock_core::tracing::TracingError;

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - settings, IO, or output errors
    pub const GENERAL_ERROR: i32 = 1;
    /// Script error - a replay line could not be parsed or applied
    pub const SCRIPT_ERROR: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Settings error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Replay script error
    #[error("Script error at line {line}: {message}")]
    Script {
        /// 1-based line number in the script
        line: usize,
        /// What went wrong
        message: String,
    },

    /// Layout engine error outside a script
    #[error("Layout error: {0}")]
    Dock(#[from] DockError),

    /// Output serialization error
    #[error("Output error: {0}")]
    Output(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<TracingError> for CliError {
    fn from(err: TracingError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<TabdockError> for CliError {
    fn from(err: TabdockError) -> Self {
        match err {
            TabdockError::Dock(e) => Self::Dock(e),
            TabdockError::Config(e) => e.into(),
            TabdockError::Tracing(e) => e.into(),
        }
    }
}

impl CliError {
    /// Builds a script error for `line`.
    pub fn script(line: usize, message: impl Into<String>) -> Self {
        Self::Script {
            line,
            message: message.into(),
        }
    }

    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (settings, layout, output, IO)
    /// - 2: Script error (unknown command, bad arguments, missing tab)
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Script { .. } => exit_codes::SCRIPT_ERROR,
            Self::Config(_) | Self::Dock(_) | Self::Output(_) | Self::Io(_) => {
                exit_codes::GENERAL_ERROR
            }
        }
    }
}
