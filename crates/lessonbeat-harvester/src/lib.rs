//! Lessonbeat Harvester
//!
//! Periodic harvesting of lesson plans from a document tree.
//!
//! # Overview
//!
//! The harvester is responsible for:
//! - **Traversal**: Walking the tree and picking documents changed after a cutoff
//! - **Extraction**: Running each document through the extractor pipeline
//! - **Publishing**: Handing records to a [`RecordSink`](lessonbeat_domain::RecordSink)
//! - **Scheduling**: Repeating the cycle on a fixed period until Ctrl+C
//! - **Metrics collection**: Counting documents, records, skips and failures
//!
//! # Cycle Semantics
//!
//! | Event | Effect |
//! |-------|--------|
//! | Unreadable directory or entry | Logged, counted, siblings still scanned |
//! | Per-file extraction failure | Logged, counted, next file |
//! | Document without the plan marker | Zero records, counted as mismatch |
//! | Sink rejects a record | Logged, counted, never retried |
//! | Extraction helper cannot start | Cycle aborted, cutoff kept |
//!
//! # Usage
//!
//! ## One-time Scan
//!
//! ```no_run
//! use lessonbeat_harvester::{HarvestConfig, Harvester, MemorySink};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HarvestConfig::backfill("/srv/plans");
//! let mut harvester = Harvester::from_config(&config);
//! let mut sink = MemorySink::new();
//!
//! let metrics = harvester.run_cycle(config.initial_cutoff(std::time::SystemTime::now()), &mut sink)?;
//! println!("{}", metrics.summary());
//! # Ok(())
//! # }
//! ```
//!
//! ## Background Worker
//!
//! ```no_run
//! use lessonbeat_harvester::{HarvestConfig, HarvestWorker, JsonLinesSink};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HarvestConfig::new("/srv/plans");
//!     let mut worker = HarvestWorker::new(&config);
//!
//!     // Run indefinitely (until Ctrl+C)
//!     worker.run(JsonLinesSink::new(std::io::stdout())).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! path = "/srv/plans"
//! period_secs = 60
//! scan_all = false
//! extension = "docx"
//!
//! [extractor]
//! backend = "native"          # or "command" (unzip | sed)
//! body_member = "word/document.xml"
//! unzip_program = "unzip"
//! sed_program = "sed"
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod metrics;
mod scanner;
mod sink;
mod harvester;
mod worker;

pub use error::{HarvestError, ScanError, SinkError};
pub use config::HarvestConfig;
pub use metrics::HarvestMetrics;
pub use scanner::{Scan, ScanStats, TreeScanner, DEFAULT_EXTENSION};
pub use sink::{JsonLinesSink, LessonPlanEvent, MemorySink, EVENT_TYPE};
pub use harvester::{DynExtractor, Harvester};
pub use worker::HarvestWorker;
