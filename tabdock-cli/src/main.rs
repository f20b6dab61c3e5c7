//! `Tabdock` CLI - Command-line driver for the `Tabdock` layout engine
//!
//! Builds the demo layout, replays scripted tab moves against it, and prints
//! the resulting tree as an outline or JSON.

mod cli;
mod commands;
mod error;
mod format;
mod util;

use clap::Parser;
use cli::Cli;
use commands::GlobalOptions;
use tabdock_core::tracing::init_tracing;

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    if !cli.quiet {
        // Broken settings are reported by the command itself
        let tracing_config = util::load_settings(config_path)
            .unwrap_or_default()
            .to_tracing_config(cli.verbose);
        if let Err(e) = init_tracing(&tracing_config) {
            eprintln!("Warning: {e}");
        }
    }

    let options = GlobalOptions {
        config_path,
        format: cli.format,
        quiet: cli.quiet,
    };
    let result = commands::dispatch(options, cli.command);

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}
