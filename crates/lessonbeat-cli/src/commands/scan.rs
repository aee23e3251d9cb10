//! Scan command implementation.

use crate::cli::{CliFormat, ScanArgs};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use chrono::DateTime;
use lessonbeat_harvester::{DynExtractor, HarvestConfig, HarvestMetrics, Harvester, JsonLinesSink, MemorySink};
use std::time::SystemTime;

/// Execute the scan command.
///
/// Records go to stdout, the summary to stderr.
pub fn execute_scan(args: ScanArgs, formatter: &Formatter) -> Result<()> {
    let metrics = match formatter.format() {
        CliFormat::Json => {
            let (mut harvester, cutoff) = prepare(&args)?;
            let mut sink = JsonLinesSink::new(std::io::stdout().lock());
            harvester.run_cycle(cutoff, &mut sink)?
        }
        CliFormat::Table | CliFormat::Quiet => {
            let (sink, metrics) = collect_records(&args)?;
            println!("{}", formatter.format_records(&sink.records)?);
            metrics
        }
    };

    eprintln!("{}", formatter.summary(&metrics));
    Ok(())
}

/// Run one cycle and collect the records in memory.
fn collect_records(args: &ScanArgs) -> Result<(MemorySink, HarvestMetrics)> {
    let (mut harvester, cutoff) = prepare(args)?;
    let mut sink = MemorySink::new();
    let metrics = harvester.run_cycle(cutoff, &mut sink)?;
    Ok((sink, metrics))
}

fn prepare(args: &ScanArgs) -> Result<(Harvester<DynExtractor>, SystemTime)> {
    let cutoff = parse_since(args.since.as_deref())?;
    let config = scan_config(args)?;
    Ok((Harvester::from_config(&config), cutoff))
}

fn scan_config(args: &ScanArgs) -> Result<HarvestConfig> {
    if !args.root.is_dir() {
        return Err(CliError::InvalidInput(format!(
            "{} is not a directory",
            args.root.display()
        )));
    }

    let mut config = HarvestConfig::backfill(&args.root);
    config.extension = args.extension.clone();
    config.extractor.backend = args.backend.into();
    config.validate().map_err(CliError::InvalidInput)?;
    Ok(config)
}

/// Parse `--since`; no value means every document.
pub fn parse_since(since: Option<&str>) -> Result<SystemTime> {
    match since {
        None => Ok(SystemTime::UNIX_EPOCH),
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map(SystemTime::from)
            .map_err(|e| CliError::InvalidInput(format!("--since '{}': {}", value, e))),
    }
}
