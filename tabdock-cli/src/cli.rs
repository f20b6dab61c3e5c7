//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// `Tabdock` command-line driver for the docking layout engine
#[derive(Parser)]
#[command(name = "tabdock")]
#[command(author, version, about = "Tabdock docking layout driver")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format for printed trees
    #[arg(short, long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Build the demo layout and print it
    #[command(about = "Build the demo layout and print it")]
    Demo,

    /// Replay a script of user interactions against the demo layout
    #[command(about = "Replay scripted interactions against the demo layout")]
    Replay {
        /// Script file, one command per line
        script: PathBuf,

        /// Print the tree after every applied command
        #[arg(long)]
        trace: bool,
    },

    /// Inspect or create the settings file
    #[command(subcommand)]
    Settings(SettingsCommands),
}

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Print the effective settings as TOML
    #[command(about = "Print the effective settings as TOML")]
    Show,

    /// Write the default settings file
    #[command(about = "Write the default settings file")]
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Output format for printed trees
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented outline
    #[default]
    Text,
    /// JSON snapshot
    Json,
}
