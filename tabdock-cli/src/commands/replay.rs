//! Replay command: applies scripted interactions to the demo layout.
//!
//! One command per line; blank lines and `#` comments are skipped.
//!
//! ```text
//! toggle <tab>                       activate a tab
//! close <tab>                        remove a tab
//! drop <tab> <zone> <target-tab>     drag a tab onto the host of another
//! drag <tab> <x> <y> <target-tab>    same, zone taken from a pointer position
//! new <tab> <zone> <target-tab>      drop foreign data naming a new tab
//! print                              print the current tree
//! ```
//!
//! Pointer positions are percentages of the target host (`0..=100`).

use std::path::Path;

use tabdock_core::dock::{DropOutcome, DropPayload, LayoutId, TabId};
use tabdock_core::drag_drop::{DropZone, DropZoneConfig, ZoneClassifier};
use tabdock_core::trace_operation;
use tabdock_core::tracing::span_names;

use super::GlobalOptions;
use crate::error::CliError;
use crate::format::format_tree;
use crate::util::{Session, load_settings};

/// Side length of the virtual host box pointer positions refer to
const HOST_EXTENT: f64 = 100.0;

/// One parsed script line
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    /// Activate a tab
    Toggle(String),
    /// Remove a tab
    Close(String),
    /// Drop a known tab onto the host of `target`
    Drop {
        /// Dragged tab
        tab: String,
        /// Zone of the target host
        zone: DropZone,
        /// Any tab of the target host
        target: String,
    },
    /// Drop a known tab at a pointer position over the host of `target`
    Drag {
        /// Dragged tab
        tab: String,
        /// Horizontal pointer position
        x: f64,
        /// Vertical pointer position
        y: f64,
        /// Any tab of the target host
        target: String,
    },
    /// Drop foreign data naming a tab the tree does not know
    New {
        /// ID for the new tab
        tab: String,
        /// Zone of the target host
        zone: DropZone,
        /// Any tab of the target host
        target: String,
    },
    /// Print the current tree
    Print,
}

impl ScriptCommand {
    /// Parses one script line. Returns `Ok(None)` for blank and comment lines.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let words: Vec<&str> = line.split_whitespace().collect();
        let command = match words.as_slice() {
            ["toggle", tab] => Self::Toggle((*tab).to_owned()),
            ["close", tab] => Self::Close((*tab).to_owned()),
            ["drop", tab, zone, target] => Self::Drop {
                tab: (*tab).to_owned(),
                zone: parse_zone(zone)?,
                target: (*target).to_owned(),
            },
            ["drag", tab, x, y, target] => Self::Drag {
                tab: (*tab).to_owned(),
                x: parse_coordinate(x)?,
                y: parse_coordinate(y)?,
                target: (*target).to_owned(),
            },
            ["new", tab, zone, target] => Self::New {
                tab: (*tab).to_owned(),
                zone: parse_zone(zone)?,
                target: (*target).to_owned(),
            },
            ["print"] => Self::Print,
            [name, ..] if is_known(name) => {
                return Err(format!("wrong number of arguments for '{name}'"));
            }
            [name, ..] => return Err(format!("unknown command '{name}'")),
            [] => return Ok(None),
        };
        Ok(Some(command))
    }
}

fn is_known(name: &str) -> bool {
    matches!(name, "toggle" | "close" | "drop" | "drag" | "new" | "print")
}

fn parse_zone(word: &str) -> Result<DropZone, String> {
    word.parse()
        .map_err(|()| format!("invalid zone '{word}' (expected left, right, top, bottom or center)"))
}

fn parse_coordinate(word: &str) -> Result<f64, String> {
    word.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("invalid coordinate '{word}'"))
}

/// Replay command handler
pub fn cmd_replay(options: GlobalOptions<'_>, script: &Path, trace: bool) -> Result<(), CliError> {
    let content = std::fs::read_to_string(script)?;
    let settings = load_settings(options.config_path)?;
    let classifier = settings.to_drop_config();
    let mut session = Session::demo(&settings)?;

    let _span = trace_operation!(span_names::REPLAY, path = %script.display()).entered();

    for (index, line) in content.lines().enumerate() {
        let number = index + 1;
        let Some(command) = ScriptCommand::parse(line).map_err(|e| CliError::script(number, e))?
        else {
            continue;
        };
        tracing::debug!(line = number, command = ?command, "Replaying");
        let print = matches!(command, ScriptCommand::Print);
        apply(&mut session, &command, &classifier).map_err(|e| CliError::script(number, e))?;
        if (print || trace) && !options.quiet {
            print_tree(&session, options)?;
        }
    }

    if !options.quiet {
        print_tree(&session, options)?;
    }
    Ok(())
}

fn print_tree(session: &Session, options: GlobalOptions<'_>) -> Result<(), CliError> {
    let view = session.dock.render(session.root)?;
    print!("{}", format_tree(&view, options.format)?);
    Ok(())
}

/// Applies one command to the session.
///
/// Drops that the engine ignores are not errors; they are logged and the
/// script goes on.
pub fn apply(
    session: &mut Session,
    command: &ScriptCommand,
    classifier: &DropZoneConfig,
) -> Result<(), String> {
    match command {
        ScriptCommand::Toggle(tab) => {
            let host = host_of(session, tab)?;
            session
                .dock
                .toggle_tab(host, &TabId::from(tab.as_str()))
                .map_err(|e| e.to_string())?;
        }
        ScriptCommand::Close(tab) => {
            let host = host_of(session, tab)?;
            session
                .dock
                .remove_tab(host, &TabId::from(tab.as_str()))
                .map_err(|e| e.to_string())?;
        }
        ScriptCommand::Drop { tab, zone, target } => {
            host_of(session, tab)?;
            let data = DropPayload::for_tab(&TabId::from(tab.as_str())).to_json();
            drop_onto(session, target, *zone, &data)?;
        }
        ScriptCommand::Drag { tab, x, y, target } => {
            host_of(session, tab)?;
            let zone = classifier.classify(*x, *y, HOST_EXTENT, HOST_EXTENT);
            let data = DropPayload::for_tab(&TabId::from(tab.as_str())).to_json();
            drop_onto(session, target, zone, &data)?;
        }
        ScriptCommand::New { tab, zone, target } => {
            if session.host_of(tab).is_some() {
                return Err(format!("tab '{tab}' already exists"));
            }
            let data = serde_json::json!({ "id": tab, "title": format!("Tab {tab}") }).to_string();
            drop_onto(session, target, *zone, &data)?;
        }
        ScriptCommand::Print => {}
    }
    Ok(())
}

fn host_of(session: &Session, tab: &str) -> Result<LayoutId, String> {
    session
        .host_of(tab)
        .ok_or_else(|| format!("no tab '{tab}' in the layout"))
}

fn drop_onto(session: &mut Session, target: &str, zone: DropZone, data: &str) -> Result<(), String> {
    let host = host_of(session, target)?;
    let outcome = session
        .dock
        .on_drop(host, zone, data)
        .map_err(|e| e.to_string())?;
    match outcome {
        DropOutcome::Ignored | DropOutcome::SelfDrop => {
            tracing::info!(outcome = ?outcome, "Drop had no effect");
        }
        DropOutcome::Added { .. } | DropOutcome::Split { .. } => {}
    }
    Ok(())
}
