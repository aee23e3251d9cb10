//! One harvest cycle: walk, extract, publish

use crate::{HarvestConfig, HarvestError, HarvestMetrics, TreeScanner};
use lessonbeat_domain::RecordSink;
use lessonbeat_extractor::TextExtractor;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime};
use tracing::{error, info, warn};

/// Extractor chosen at runtime from configuration
pub type DynExtractor = Box<dyn TextExtractor + Send + Sync>;

/// Runs scan cycles over one document tree
///
/// # Examples
///
/// ```no_run
/// use lessonbeat_harvester::{HarvestConfig, Harvester, JsonLinesSink};
/// use std::time::SystemTime;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = HarvestConfig::from_file("lessonbeat.toml")?;
/// let mut harvester = Harvester::from_config(&config);
/// let mut sink = JsonLinesSink::new(std::io::stdout());
///
/// let metrics = harvester.run_cycle(SystemTime::UNIX_EPOCH, &mut sink)?;
/// eprintln!("{}", metrics.summary());
/// # Ok(())
/// # }
/// ```
pub struct Harvester<E> {
    scanner: TreeScanner<E>,
    root: PathBuf,
    metrics: HarvestMetrics,
}

impl Harvester<DynExtractor> {
    /// Create a harvester using the configured extractor and extension
    pub fn from_config(config: &HarvestConfig) -> Self {
        let scanner = TreeScanner::new(config.extractor.build()).with_extension(config.extension.clone());
        Self::new(&config.path, scanner)
    }
}

impl<E: TextExtractor> Harvester<E> {
    /// Create a harvester for the tree at `root`
    pub fn new(root: impl Into<PathBuf>, scanner: TreeScanner<E>) -> Self {
        Self {
            scanner,
            root: root.into(),
            metrics: HarvestMetrics::new(),
        }
    }

    /// Root of the harvested tree
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Metrics accumulated over every cycle so far
    pub fn metrics(&self) -> &HarvestMetrics {
        &self.metrics
    }

    /// Reset metrics counters
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Publish every record for documents modified after `cutoff`
    ///
    /// Per-entry failures and rejected publishes are logged, counted and
    /// skipped; nothing is retried. A fatal extraction error stops the cycle
    /// and is returned. Returns the metrics of this cycle alone.
    pub fn run_cycle<S>(&mut self, cutoff: SystemTime, sink: &mut S) -> Result<HarvestMetrics, HarvestError>
    where
        S: RecordSink,
        S::Error: Display,
    {
        let start = Instant::now();
        let mut cycle = HarvestMetrics::new();
        let mut fatal = None;

        let mut scan = self.scanner.scan(&self.root, cutoff);
        for item in scan.by_ref() {
            match item {
                Ok(record) => {
                    let filename = record.filename.clone();
                    match sink.publish(record) {
                        Ok(()) => cycle.record_published(),
                        Err(e) => {
                            warn!(filename = %filename, error = %e, "Failed to publish record");
                            cycle.record_publish_failure();
                        }
                    }
                }
                Err(e) if e.is_fatal() => {
                    fatal = Some(e);
                    break;
                }
                Err(e) => {
                    warn!(path = ?e.path(), kind = e.kind(), error = %e, "Skipping entry");
                    cycle.record_skip();
                }
            }
        }
        cycle.record_scan(scan.stats());
        cycle.total_runtime_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        if let Some(e) = fatal {
            cycle.record_failed_cycle();
            self.metrics.merge(&cycle);
            error!(
                root = %self.root.display(),
                path = ?e.path(),
                kind = e.kind(),
                error = %e,
                "Harvest cycle aborted"
            );
            return Err(HarvestError::FatalExtraction(e));
        }

        cycle.record_cycle();
        self.metrics.merge(&cycle);
        info!(
            root = %self.root.display(),
            documents = cycle.documents_scanned,
            published = cycle.records_published,
            mismatches = cycle.template_mismatches,
            skipped = cycle.skipped,
            publish_failures = cycle.publish_failures,
            "Harvest cycle completed"
        );

        Ok(cycle)
    }
}
