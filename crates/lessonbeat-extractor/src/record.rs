//! Record assembly

use crate::normalize::clean;
use crate::sections::{SectionScanner, Sections};
use crate::template::{plan_filename, split_plans};
use lessonbeat_domain::{DocumentRef, LessonPlanRecord, SectionName};
use std::time::SystemTime;
use tracing::debug;

/// Assembles [`LessonPlanRecord`]s from extracted text
#[derive(Debug, Clone, Copy)]
pub struct RecordBuilder<'a> {
    scanner: SectionScanner<'a>,
}

impl RecordBuilder<'static> {
    /// Builder using the built-in section table
    pub fn new() -> Self {
        Self {
            scanner: SectionScanner::new(),
        }
    }
}

impl Default for RecordBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> RecordBuilder<'a> {
    /// Builder using a custom scanner
    pub fn with_scanner(scanner: SectionScanner<'a>) -> Self {
        Self { scanner }
    }

    /// Assemble one record from scanned sections
    ///
    /// Teacher names and the full text are stored as extracted; every other
    /// item goes through [`clean`] and is dropped if nothing is left.
    pub fn build(
        mut sections: Sections,
        full_text: impl Into<String>,
        filename: impl Into<String>,
        modified_at: SystemTime,
    ) -> LessonPlanRecord {
        let mut record = LessonPlanRecord::new(filename, modified_at);
        record.full_text = full_text.into();

        for name in SectionName::ALL {
            let items = sections.take(name);
            let target = record.section_mut(name);
            if name == SectionName::Teacher {
                *target = items;
            } else {
                target.extend(
                    items
                        .iter()
                        .map(|item| clean(item))
                        .filter(|item| !item.is_empty()),
                );
            }
        }

        record
    }

    /// Build every plan contained in a document's text
    ///
    /// Returns an empty vector when the text does not carry the template
    /// marker. Plans after the first get a numeric filename suffix.
    pub fn build_records(&self, text: &str, doc: &DocumentRef) -> Vec<LessonPlanRecord> {
        let plans = split_plans(text);
        if plans.is_empty() {
            debug!(path = %doc.path.display(), "No daily lesson plan marker, skipping");
            return Vec::new();
        }

        plans
            .into_iter()
            .enumerate()
            .map(|(idx, body)| {
                let sections = self.scanner.scan_text(body);
                Self::build(sections, body, plan_filename(&doc.filename, idx), doc.modified_at)
            })
            .collect()
    }
}
