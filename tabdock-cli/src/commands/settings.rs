//! Settings commands.

use tabdock_core::config::DockSettings;

use super::GlobalOptions;
use crate::cli::SettingsCommands;
use crate::error::CliError;
use crate::util::{load_settings, settings_path};

/// Settings command handler
pub fn cmd_settings(options: GlobalOptions<'_>, subcmd: SettingsCommands) -> Result<(), CliError> {
    match subcmd {
        SettingsCommands::Show => cmd_show(options),
        SettingsCommands::Init { force } => cmd_init(options, force),
    }
}

fn cmd_show(options: GlobalOptions<'_>) -> Result<(), CliError> {
    let settings = load_settings(options.config_path)?;
    if !options.quiet {
        print!("{}", settings.to_toml_string()?);
    }
    Ok(())
}

fn cmd_init(options: GlobalOptions<'_>, force: bool) -> Result<(), CliError> {
    let path = settings_path(options.config_path)?;
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    DockSettings::default().save_to(&path)?;
    if !options.quiet {
        println!("Wrote default settings to {}", path.display());
    }
    Ok(())
}
