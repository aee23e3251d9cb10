//! Configuration file management for the CLI.

use crate::error::{CliError, Result};
use lessonbeat_harvester::HarvestConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the default configuration file path.
pub fn default_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    Ok(home.join(".lessonbeat").join("config.toml"))
}

/// Resolve the configuration file path, preferring an explicit one.
pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_path(),
    }
}

/// Load and validate configuration from file.
pub fn load(path: &Path) -> Result<HarvestConfig> {
    if !path.exists() {
        return Err(CliError::Config(format!(
            "{} not found. Use 'config init' to create it.",
            path.display()
        )));
    }
    Ok(HarvestConfig::from_file(path)?)
}

/// Save configuration to file.
pub fn save(config: &HarvestConfig, path: &Path) -> Result<()> {
    config.validate().map_err(CliError::Config)?;

    // Create parent directory if it doesn't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, config.to_toml()?)?;
    Ok(())
}

/// Write a fresh configuration for `root` unless one exists.
pub fn init(path: &Path, root: &Path, scan_all: bool, force: bool) -> Result<HarvestConfig> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let root = if root.is_absolute() {
        root.to_path_buf()
    } else {
        std::env::current_dir()?.join(root)
    };
    let config = if scan_all {
        HarvestConfig::backfill(root)
    } else {
        HarvestConfig::new(root)
    };

    save(&config, path)?;
    Ok(config)
}
