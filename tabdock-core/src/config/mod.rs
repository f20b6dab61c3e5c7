//! Configuration management for `Tabdock`
//!
//! This module provides [`DockSettings`] for loading and saving settings
//! files in TOML format.

pub mod settings;

pub use settings::{
    APP_DIR, DockSettings, DropSettings, LayoutSettings, LoggingSettings, SETTINGS_FILE,
};
