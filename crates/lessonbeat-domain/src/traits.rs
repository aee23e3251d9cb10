//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::LessonPlanRecord;

/// Trait for handing finished records to a downstream consumer
///
/// Implemented by the infrastructure layer (lessonbeat-harvester). A sink may
/// block and may fail; callers must not assume success and must not retry on
/// the sink's behalf.
pub trait RecordSink {
    /// Error type for publish operations
    type Error;

    /// Publish one record
    fn publish(&mut self, record: LessonPlanRecord) -> Result<(), Self::Error>;
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    type Error = S::Error;

    fn publish(&mut self, record: LessonPlanRecord) -> Result<(), Self::Error> {
        (**self).publish(record)
    }
}
