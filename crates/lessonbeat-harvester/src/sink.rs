//! Record sinks
//!
//! [`JsonLinesSink`] writes one JSON event per record, using the field names
//! downstream indices already expect:
//!
//! ```json
//! {"@timestamp":"2024-03-04T08:00:00Z","type":"lessonbeat","modtime":"2024-03-01T17:12:09Z",
//!  "filename":"grade5/week1.docx","fulltext":"...","teacher":["Jane Smith"],
//!  "eslr":["Communicate clearly."],"eslr_num":1,"essential_questions":[],
//!  "biblical_integration":[],"unit_objectives":[],"lesson_objectives":[]}
//! ```

use crate::SinkError;
use chrono::{DateTime, Utc};
use lessonbeat_domain::{LessonPlanRecord, RecordSink};
use serde::Serialize;
use std::convert::Infallible;
use std::io::Write;

/// Value of the `type` field on every event
pub const EVENT_TYPE: &str = "lessonbeat";

/// Wire shape of one published record
#[derive(Debug, Serialize)]
pub struct LessonPlanEvent<'a> {
    /// Time the event was emitted
    #[serde(rename = "@timestamp")]
    pub timestamp: DateTime<Utc>,

    /// Always [`EVENT_TYPE`]
    #[serde(rename = "type")]
    pub event_type: &'static str,

    /// Source modification time
    pub modtime: DateTime<Utc>,

    /// Source filename (suffixed for later plans of one file)
    pub filename: &'a str,

    /// Plan body
    pub fulltext: &'a str,

    /// Teacher names
    pub teacher: &'a [String],

    /// Outcome statements
    pub eslr: &'a [String],

    /// Number of outcome statements
    pub eslr_num: usize,

    /// Essential questions
    pub essential_questions: &'a [String],

    /// Biblical integration notes
    pub biblical_integration: &'a [String],

    /// Unit objectives
    pub unit_objectives: &'a [String],

    /// Lesson objectives
    pub lesson_objectives: &'a [String],
}

impl<'a> LessonPlanEvent<'a> {
    /// Build the event for `record`, stamped with `now`
    pub fn new(record: &'a LessonPlanRecord, now: DateTime<Utc>) -> Self {
        Self {
            timestamp: now,
            event_type: EVENT_TYPE,
            modtime: DateTime::<Utc>::from(record.modified_at),
            filename: &record.filename,
            fulltext: &record.full_text,
            teacher: &record.teachers,
            eslr: &record.outcomes,
            eslr_num: record.outcome_count(),
            essential_questions: &record.essential_questions,
            biblical_integration: &record.biblical_integration,
            unit_objectives: &record.unit_objectives,
            lesson_objectives: &record.lesson_objectives,
        }
    }
}

/// Writes each record as a JSON line
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    /// Wrap an output stream
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the output stream
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordSink for JsonLinesSink<W> {
    type Error = SinkError;

    fn publish(&mut self, record: LessonPlanRecord) -> Result<(), Self::Error> {
        let event = LessonPlanEvent::new(&record, Utc::now());
        serde_json::to_writer(&mut self.writer, &event)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps published records in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Records in publish order
    pub records: Vec<LessonPlanRecord>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordSink for MemorySink {
    type Error = Infallible;

    fn publish(&mut self, record: LessonPlanRecord) -> Result<(), Self::Error> {
        self.records.push(record);
        Ok(())
    }
}
