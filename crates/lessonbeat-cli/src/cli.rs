//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use lessonbeat_extractor::ExtractorBackend;
use std::path::PathBuf;

/// Lessonbeat - Harvest daily lesson plans from a document tree.
#[derive(Debug, Parser)]
#[command(name = "lessonbeat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "json")]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Configuration file path (default: ~/.lessonbeat/config.toml)
    #[arg(short, long, global = true, env = "LESSONBEAT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// One JSON event per line (default)
    Json,
    /// Table format
    Table,
    /// Quiet format (filenames only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Harvest continuously using the configuration file
    Run,

    /// Harvest a tree once and exit
    Scan(ScanArgs),

    /// Show the records parsed from a single document
    Inspect(InspectArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the scan command.
#[derive(Debug, Parser)]
pub struct ScanArgs {
    /// Root of the document tree
    pub root: PathBuf,

    /// Only documents modified after this RFC 3339 time (default: all)
    #[arg(short, long)]
    pub since: Option<String>,

    /// File extension of candidate documents
    #[arg(short, long, default_value = "docx")]
    pub extension: String,

    /// Extraction backend
    #[arg(short, long, value_enum, default_value = "native")]
    pub backend: BackendArg,
}

/// Arguments for the inspect command.
#[derive(Debug, Parser)]
pub struct InspectArgs {
    /// Document to inspect
    pub file: PathBuf,

    /// Extraction backend
    #[arg(short, long, value_enum, default_value = "native")]
    pub backend: BackendArg,

    /// Print the extracted text instead of records
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Write a default configuration file
    Init {
        /// Root of the document tree
        #[arg(short, long)]
        root: PathBuf,

        /// Harvest existing documents on the first cycle
        #[arg(long)]
        scan_all: bool,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,
}

/// Extraction backend argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BackendArg {
    /// Read the container in-process
    Native,
    /// Pipe through unzip and sed
    Command,
}

impl From<BackendArg> for ExtractorBackend {
    fn from(backend: BackendArg) -> Self {
        match backend {
            BackendArg::Native => ExtractorBackend::Native,
            BackendArg::Command => ExtractorBackend::Command,
        }
    }
}
