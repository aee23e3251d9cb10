//! Lessonbeat CLI - Harvest daily lesson plans into JSON events.

use clap::Parser;
use lessonbeat_cli::commands;
use lessonbeat_cli::{config, Cli, Command, Formatter};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout carries only records
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

async fn run() -> lessonbeat_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let color_enabled = !cli.no_color && std::io::stderr().is_terminal();
    let formatter = Formatter::new(cli.format, color_enabled);

    // Handle commands
    match cli.command {
        Command::Run => {
            let path = config::resolve_path(cli.config.as_deref())?;
            commands::execute_run(&path, &formatter).await?;
        }
        Command::Scan(args) => {
            commands::execute_scan(args, &formatter)?;
        }
        Command::Inspect(args) => {
            commands::execute_inspect(args, &formatter)?;
        }
        Command::Config(args) => {
            let path = config::resolve_path(cli.config.as_deref())?;
            commands::execute_config(args, &path, &formatter)?;
        }
    }

    Ok(())
}
