//! Lessonbeat Extractor
//!
//! Turns word-processor documents into structured lesson plan records.
//!
//! # Overview
//!
//! The extractor is the core of Lessonbeat. Each document goes through a
//! fixed pipeline, and every stage degrades gracefully: a malformed section
//! becomes an empty list, a document without the template marker yields no
//! records, and an unreadable container becomes an [`ExtractionError`] the
//! caller can skip.
//!
//! # Architecture
//!
//! ```text
//! .docx → TextExtractor → split_plans → SectionScanner → RecordBuilder → LessonPlanRecord
//!                                                         (clean each item)
//! ```
//!
//! # Key Features
//!
//! - **Two extraction backends**: in-process ZIP/XML filtering, or the
//!   `unzip | sed` helper pipeline
//! - **Declarative section table**: label variants are data, not code
//! - **Idempotent normalization**: `clean(clean(s)) == clean(s)`
//! - **Multi-plan documents**: one record per "daily lesson plan" marker
//!
//! # Example Usage
//!
//! ```no_run
//! use lessonbeat_domain::DocumentRef;
//! use lessonbeat_extractor::{DocxExtractor, RecordBuilder, TextExtractor};
//! use std::time::SystemTime;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = DocxExtractor::default();
//! let doc = DocumentRef::new("/plans", "/plans/week1.docx", SystemTime::now());
//!
//! let text = extractor.extract_text(&doc.path)?;
//! let records = RecordBuilder::default().build_records(&text, &doc);
//!
//! for record in &records {
//!     println!("{}: {} outcomes", record.filename, record.outcome_count());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod command;
mod config;
mod docx;
mod error;
mod matching;
mod normalize;
mod record;
mod sections;
mod template;
mod text;

#[cfg(test)]
mod tests;

pub use command::CommandExtractor;
pub use config::{ExtractorBackend, ExtractorConfig};
pub use docx::{DocxExtractor, MAX_BODY_BYTES};
pub use error::ExtractionError;
pub use normalize::{clean, SYNONYMS};
pub use record::RecordBuilder;
pub use sections::{Capture, SectionScanner, SectionSpec, Sections, SECTIONS, TEACHER_SEPARATORS};
pub use template::{plan_filename, split_plans, PLAN_MARKER};
pub use text::{strip_markup, TextExtractor};
