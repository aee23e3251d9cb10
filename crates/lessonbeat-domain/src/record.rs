//! Record module - the normalized output of the harvesting pipeline

use crate::SectionName;
use std::time::SystemTime;

/// One recognized lesson plan, ready for indexing
///
/// Every list field defaults to an empty vector; a missing section in the
/// source document shows up as an empty list, never as an absent field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonPlanRecord {
    /// Source filename, with a numeric suffix for the 2nd..Nth plan of a file
    pub filename: String,

    /// Modification time of the source file
    pub modified_at: SystemTime,

    /// Plan body as extracted
    pub full_text: String,

    /// Teacher names, stored as extracted
    pub teachers: Vec<String>,

    /// Learning-outcome statements (ESLRs)
    pub outcomes: Vec<String>,

    /// Essential questions
    pub essential_questions: Vec<String>,

    /// Biblical integration notes
    pub biblical_integration: Vec<String>,

    /// Unit objectives
    pub unit_objectives: Vec<String>,

    /// Lesson objectives
    pub lesson_objectives: Vec<String>,
}

impl LessonPlanRecord {
    /// Create an empty record for the given file
    pub fn new(filename: impl Into<String>, modified_at: SystemTime) -> Self {
        Self {
            filename: filename.into(),
            modified_at,
            full_text: String::new(),
            teachers: Vec::new(),
            outcomes: Vec::new(),
            essential_questions: Vec::new(),
            biblical_integration: Vec::new(),
            unit_objectives: Vec::new(),
            lesson_objectives: Vec::new(),
        }
    }

    /// Number of outcome statements
    ///
    /// Derived from `outcomes`, so it can never disagree with it.
    pub fn outcome_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Items of one section
    pub fn section(&self, name: SectionName) -> &[String] {
        match name {
            SectionName::Teacher => &self.teachers,
            SectionName::Outcomes => &self.outcomes,
            SectionName::EssentialQuestions => &self.essential_questions,
            SectionName::BiblicalIntegration => &self.biblical_integration,
            SectionName::UnitObjectives => &self.unit_objectives,
            SectionName::LessonObjectives => &self.lesson_objectives,
        }
    }

    /// Mutable items of one section
    pub fn section_mut(&mut self, name: SectionName) -> &mut Vec<String> {
        match name {
            SectionName::Teacher => &mut self.teachers,
            SectionName::Outcomes => &mut self.outcomes,
            SectionName::EssentialQuestions => &mut self.essential_questions,
            SectionName::BiblicalIntegration => &mut self.biblical_integration,
            SectionName::UnitObjectives => &mut self.unit_objectives,
            SectionName::LessonObjectives => &mut self.lesson_objectives,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_empty() {
        let record = LessonPlanRecord::new("a.docx", SystemTime::UNIX_EPOCH);
        assert_eq!(record.filename, "a.docx");
        assert_eq!(record.outcome_count(), 0);
        for section in SectionName::ALL {
            assert!(record.section(section).is_empty());
        }
    }

    #[test]
    fn test_outcome_count_tracks_outcomes() {
        let mut record = LessonPlanRecord::new("a.docx", SystemTime::UNIX_EPOCH);
        record.section_mut(SectionName::Outcomes).push("Serve others".to_string());
        record.outcomes.push("Think critically".to_string());
        assert_eq!(record.outcome_count(), 2);
        assert_eq!(record.outcome_count(), record.outcomes.len());
    }
}
