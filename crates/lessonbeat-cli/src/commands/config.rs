//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config;
use crate::error::Result;
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(args: ConfigArgs, path: &Path, formatter: &Formatter) -> Result<()> {
    match args.action {
        ConfigAction::Init { root, scan_all, force } => {
            let written = config::init(path, &root, scan_all, force)?;
            println!(
                "{}",
                formatter.success(&format!(
                    "Wrote {} (root: {})",
                    path.display(),
                    written.path.display()
                ))
            );
        }
        ConfigAction::Show => {
            let loaded = config::load(path)?;
            print!("{}", loaded.to_toml()?);
        }
        ConfigAction::Path => {
            println!("{}", path.display());
        }
    }

    Ok(())
}
