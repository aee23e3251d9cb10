//! Background worker for continuous harvesting

use crate::harvester::DynExtractor;
use crate::{HarvestConfig, HarvestError, HarvestMetrics, Harvester};
use lessonbeat_domain::RecordSink;
use lessonbeat_extractor::TextExtractor;
use std::fmt::Display;
use std::time::SystemTime;
use tokio::time::{interval, Duration};

/// Background worker that runs harvest cycles on a schedule
///
/// The worker owns the cutoff timestamp. After a cycle completes the cutoff
/// moves to the time that cycle started; a cycle aborted by a fatal error
/// leaves it where it was, so the next tick covers the same documents again.
///
/// # Examples
///
/// ```no_run
/// use lessonbeat_harvester::{HarvestConfig, HarvestWorker, JsonLinesSink};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = HarvestConfig::from_file("lessonbeat.toml")?;
///     let mut worker = HarvestWorker::new(&config);
///
///     // Run indefinitely (until Ctrl+C)
///     worker.run(JsonLinesSink::new(std::io::stdout())).await?;
///     Ok(())
/// }
/// ```
pub struct HarvestWorker<E = DynExtractor> {
    harvester: Harvester<E>,
    period: Duration,
    cutoff: SystemTime,
}

impl HarvestWorker<DynExtractor> {
    /// Create a worker from configuration, starting now
    pub fn new(config: &HarvestConfig) -> Self {
        Self::with_harvester(
            Harvester::from_config(config),
            config.period(),
            config.initial_cutoff(SystemTime::now()),
        )
    }
}

impl<E: TextExtractor> HarvestWorker<E> {
    /// Create a worker around an existing harvester
    pub fn with_harvester(harvester: Harvester<E>, period: Duration, cutoff: SystemTime) -> Self {
        Self {
            harvester,
            period,
            cutoff,
        }
    }

    /// Cutoff the next cycle will use
    pub fn cutoff(&self) -> SystemTime {
        self.cutoff
    }

    /// Run the worker until Ctrl+C
    ///
    /// A failed cycle is logged and retried on the next tick.
    ///
    /// # Errors
    ///
    /// Returns an error if the shutdown signal cannot be installed.
    pub async fn run<S>(&mut self, mut sink: S) -> Result<(), HarvestError>
    where
        S: RecordSink,
        S::Error: Display,
    {
        let mut ticker = interval(self.period);

        tracing::info!(
            root = %self.harvester.root().display(),
            "Harvest worker started (period: {:?})",
            self.period
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = self.cycle(&mut sink) {
                        tracing::error!("Harvest cycle failed, cutoff kept: {}", e);
                    }
                }
                signal = tokio::signal::ctrl_c() => {
                    signal.map_err(|e| HarvestError::Worker(e.to_string()))?;
                    tracing::info!("Shutdown signal received, stopping harvester");
                    break;
                }
            }
        }

        tracing::info!("Harvester stopped. Final metrics:\n{}", self.metrics().summary());

        Ok(())
    }

    /// Run for a specific number of cycles
    ///
    /// Stops at the first failed cycle and returns its error.
    pub async fn run_cycles<S>(&mut self, mut sink: S, cycles: usize) -> Result<(), HarvestError>
    where
        S: RecordSink,
        S::Error: Display,
    {
        let mut ticker = interval(self.period);

        for cycle in 0..cycles {
            ticker.tick().await;
            tracing::debug!("Starting harvest cycle {}/{}", cycle + 1, cycles);

            if let Err(e) = self.cycle(&mut sink) {
                tracing::error!("Harvest cycle {}/{} failed: {}", cycle + 1, cycles, e);
                return Err(e);
            }
        }

        tracing::info!("Harvester finished {} cycles. Final metrics:\n{}", cycles, self.metrics().summary());

        Ok(())
    }

    /// Get a reference to the accumulated metrics
    pub fn metrics(&self) -> &HarvestMetrics {
        self.harvester.metrics()
    }

    /// Reset the metrics counters
    pub fn reset_metrics(&mut self) {
        self.harvester.reset_metrics();
    }

    fn cycle<S>(&mut self, sink: &mut S) -> Result<HarvestMetrics, HarvestError>
    where
        S: RecordSink,
        S::Error: Display,
    {
        let started_at = SystemTime::now();
        let metrics = self.harvester.run_cycle(self.cutoff, sink)?;
        self.cutoff = started_at;
        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemorySink, TreeScanner};
    use lessonbeat_domain::LessonPlanRecord;
    use lessonbeat_extractor::{CommandExtractor, ExtractionError};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    struct PlainText;

    impl TextExtractor for PlainText {
        fn extract_text(&self, path: &Path) -> Result<String, ExtractionError> {
            fs::read_to_string(path).map_err(|source| ExtractionError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    /// Collects records into a vector the test still owns
    struct CountingSink<'a>(&'a mut Vec<LessonPlanRecord>);

    impl RecordSink for CountingSink<'_> {
        type Error = std::convert::Infallible;

        fn publish(&mut self, record: LessonPlanRecord) -> Result<(), Self::Error> {
            self.0.push(record);
            Ok(())
        }
    }

    fn short_period_worker<E: TextExtractor>(root: &Path, extractor: E) -> HarvestWorker<E> {
        HarvestWorker::with_harvester(
            Harvester::new(root, TreeScanner::new(extractor)),
            Duration::from_millis(10),
            SystemTime::UNIX_EPOCH,
        )
    }

    #[tokio::test]
    async fn test_worker_creation() {
        let dir = TempDir::new().unwrap();
        let worker = HarvestWorker::new(&HarvestConfig::backfill(dir.path()));
        assert_eq!(worker.metrics().cycle_count, 0);
        assert_eq!(worker.cutoff(), SystemTime::UNIX_EPOCH);
    }

    #[tokio::test]
    async fn test_run_cycles_publishes_each_change_once() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.docx"), "Daily Lesson Plan\nESLRs: Serve").unwrap();

        let mut published = Vec::new();
        let mut worker = short_period_worker(dir.path(), PlainText);
        worker.run_cycles(CountingSink(&mut published), 2).await.unwrap();

        assert_eq!(worker.metrics().cycle_count, 2);
        assert_eq!(published.len(), 1);
        assert!(worker.cutoff() > SystemTime::UNIX_EPOCH);
    }

    #[tokio::test]
    async fn test_failed_cycle_keeps_cutoff() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.docx"), "Daily Lesson Plan").unwrap();

        let extractor = CommandExtractor::new("lessonbeat-no-such-unzip", "sed", "word/document.xml");
        let mut worker = short_period_worker(dir.path(), extractor);
        let err = worker.run_cycles(MemorySink::new(), 3).await.unwrap_err();

        assert!(matches!(err, HarvestError::FatalExtraction(_)));
        assert_eq!(worker.cutoff(), SystemTime::UNIX_EPOCH);
        assert_eq!(worker.metrics().failed_cycles, 1);
    }

    #[tokio::test]
    async fn test_reset_metrics() {
        let dir = TempDir::new().unwrap();
        let mut worker = short_period_worker(dir.path(), PlainText);

        worker.run_cycles(MemorySink::new(), 1).await.unwrap();
        assert_eq!(worker.metrics().cycle_count, 1);

        worker.reset_metrics();
        assert_eq!(worker.metrics().cycle_count, 0);
    }
}
