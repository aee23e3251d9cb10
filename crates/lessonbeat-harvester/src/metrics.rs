//! Metrics collection for harvest cycles

use crate::scanner::ScanStats;

/// Counters collected across harvest cycles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestMetrics {
    /// Documents whose text was extracted
    pub documents_scanned: usize,

    /// Extracted documents without the lesson plan marker
    pub template_mismatches: usize,

    /// Records handed to the sink successfully
    pub records_published: usize,

    /// Records the sink rejected
    pub publish_failures: usize,

    /// Entries skipped because of traversal, metadata or extraction errors
    pub skipped: usize,

    /// Completed cycles
    pub cycle_count: usize,

    /// Cycles aborted by a fatal error
    pub failed_cycles: usize,

    /// Total runtime in milliseconds
    pub total_runtime_ms: u64,
}

impl HarvestMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the counters of one walk in
    pub fn record_scan(&mut self, stats: ScanStats) {
        self.documents_scanned += stats.documents;
        self.template_mismatches += stats.template_mismatches;
    }

    /// Record a successful publish
    pub fn record_published(&mut self) {
        self.records_published += 1;
    }

    /// Record a rejected publish
    pub fn record_publish_failure(&mut self) {
        self.publish_failures += 1;
    }

    /// Record a skipped entry
    pub fn record_skip(&mut self) {
        self.skipped += 1;
    }

    /// Record a cycle completion
    pub fn record_cycle(&mut self) {
        self.cycle_count += 1;
    }

    /// Record a cycle that stopped early
    pub fn record_failed_cycle(&mut self) {
        self.failed_cycles += 1;
    }

    /// Add the counters of `other`
    pub fn merge(&mut self, other: &HarvestMetrics) {
        self.documents_scanned += other.documents_scanned;
        self.template_mismatches += other.template_mismatches;
        self.records_published += other.records_published;
        self.publish_failures += other.publish_failures;
        self.skipped += other.skipped;
        self.cycle_count += other.cycle_count;
        self.failed_cycles += other.failed_cycles;
        self.total_runtime_ms += other.total_runtime_ms;
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        [
            "Harvest Metrics Summary".to_string(),
            "=======================".to_string(),
            format!("Cycles: {} ({} failed)", self.cycle_count, self.failed_cycles),
            format!("Total runtime: {}ms", self.total_runtime_ms),
            format!("Documents scanned: {}", self.documents_scanned),
            format!("Template mismatches: {}", self.template_mismatches),
            format!("Records published: {}", self.records_published),
            format!("Publish failures: {}", self.publish_failures),
            format!("Skipped entries: {}", self.skipped),
        ]
        .join("\n")
    }
}
