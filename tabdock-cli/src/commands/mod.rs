//! Command handler modules for the CLI.

mod demo;
mod replay;
mod settings;

use std::path::Path;

use crate::cli::{Commands, OutputFormat};
use crate::error::CliError;

/// Options shared by every command
#[derive(Debug, Clone, Copy)]
pub struct GlobalOptions<'a> {
    /// `--config` path
    pub config_path: Option<&'a Path>,
    /// Tree output format
    pub format: OutputFormat,
    /// Suppress tree output
    pub quiet: bool,
}

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(options: GlobalOptions<'_>, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Demo => demo::cmd_demo(options),
        Commands::Replay { script, trace } => replay::cmd_replay(options, &script, trace),
        Commands::Settings(subcmd) => settings::cmd_settings(options, subcmd),
    }
}
