//! Lessonbeat Domain Layer
//!
//! This crate contains the domain model shared by every other Lessonbeat crate.
//! It has ZERO external dependencies and defines the values that flow through
//! the harvesting pipeline plus the trait seams to the outside world.
//!
//! ## Key Concepts
//!
//! - **DocumentRef**: One candidate file found during traversal
//! - **SectionName**: The labeled regions of a lesson plan template
//! - **LessonPlanRecord**: The normalized output entity, one per recognized plan
//! - **RecordSink**: Where finished records are handed off
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and invariants only
//! - Infrastructure (extraction, traversal, publishing) lives in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod record;
pub mod section;
pub mod traits;

// Re-exports for convenience
pub use document::DocumentRef;
pub use record::LessonPlanRecord;
pub use section::SectionName;
pub use traits::RecordSink;
