//! Demo layout command.

use super::GlobalOptions;
use crate::error::CliError;
use crate::format::format_tree;
use crate::util::{Session, load_settings};

/// Demo command handler
pub fn cmd_demo(options: GlobalOptions<'_>) -> Result<(), CliError> {
    let settings = load_settings(options.config_path)?;
    let session = Session::demo(&settings)?;

    if !options.quiet {
        let view = session.dock.render(session.root)?;
        print!("{}", format_tree(&view, options.format)?);
    }
    Ok(())
}
