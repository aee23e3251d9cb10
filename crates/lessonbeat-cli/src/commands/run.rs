//! Run command implementation.

use crate::config;
use crate::error::Result;
use crate::output::Formatter;
use lessonbeat_harvester::{HarvestWorker, JsonLinesSink};
use std::path::Path;
use tracing::info;

/// Execute the run command.
///
/// Harvests every period until Ctrl+C, writing JSON lines to stdout.
pub async fn execute_run(config_path: &Path, formatter: &Formatter) -> Result<()> {
    let config = config::load(config_path)?;
    info!(
        config = %config_path.display(),
        root = %config.path.display(),
        period_secs = config.period_secs,
        scan_all = config.scan_all,
        "Loaded configuration"
    );

    let mut worker = HarvestWorker::new(&config);
    worker.run(JsonLinesSink::new(std::io::stdout())).await?;

    eprintln!("{}", formatter.summary(worker.metrics()));
    Ok(())
}
