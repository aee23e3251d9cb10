//! Section module - the labeled regions of a lesson plan

use std::fmt;

/// A named logical region of a lesson plan document
///
/// Variants are declared in template order:
/// - Teacher: the teacher/year level/course line
/// - Outcomes: expected schoolwide learning results (ESLRs)
/// - EssentialQuestions, BiblicalIntegration, UnitObjectives, LessonObjectives
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionName {
    /// Teacher names
    Teacher,

    /// Learning-outcome statements (ESLRs)
    Outcomes,

    /// Essential questions
    EssentialQuestions,

    /// Biblical integration notes
    BiblicalIntegration,

    /// Unit objectives
    UnitObjectives,

    /// Lesson objectives
    LessonObjectives,
}

impl SectionName {
    /// All sections in template order
    pub const ALL: [SectionName; 6] = [
        SectionName::Teacher,
        SectionName::Outcomes,
        SectionName::EssentialQuestions,
        SectionName::BiblicalIntegration,
        SectionName::UnitObjectives,
        SectionName::LessonObjectives,
    ];

    /// Get the section name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionName::Teacher => "teacher",
            SectionName::Outcomes => "outcomes",
            SectionName::EssentialQuestions => "essential_questions",
            SectionName::BiblicalIntegration => "biblical_integration",
            SectionName::UnitObjectives => "unit_objectives",
            SectionName::LessonObjectives => "lesson_objectives",
        }
    }

    /// Parse a section name from a string
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
