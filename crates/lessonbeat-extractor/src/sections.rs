//! Marker-driven section scanner
//!
//! A lesson plan is a run of lines where some lines carry a section label
//! ("ESLRs:", "Biblical Integration:", ...). The scanner walks the lines once
//! with a two-state machine driven entirely by the [`SECTIONS`] table:
//!
//! ```text
//!            label(s)                      label(t), t ≠ s
//!   Idle ───────────────▶ Capturing(s) ─────────────────────▶ Capturing(t)
//!     ▲                        │  other line → push item
//!     └─── single-line label ──┘  blank line → ignored
//! ```
//!
//! Matching is ASCII case-insensitive on trimmed lines. A section whose label
//! never shows up simply stays empty.

use crate::matching::{contains_ignore_ascii_case, split_ignore_ascii_case, strip_prefix_ignore_ascii_case};
use lessonbeat_domain::SectionName;
use std::collections::BTreeMap;

/// How a section collects its items once its label is seen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Only the label line itself; the remainder is split into names
    SingleLine,
    /// The label line may carry a `;`/`.` separated list, then a block follows
    InlineList,
    /// The remainder of the label line (if any) and every following line
    Block,
}

/// One row of the section table
#[derive(Debug, Clone, Copy)]
pub struct SectionSpec {
    /// Section this row describes
    pub name: SectionName,
    /// Accepted label spellings, matched as whole-word line prefixes
    pub labels: &'static [&'static str],
    /// Capture behavior after the label
    pub capture: Capture,
}

/// Section table for the daily lesson plan template, in template order
pub const SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        name: SectionName::Teacher,
        labels: &["teacher/year level/course"],
        capture: Capture::SingleLine,
    },
    SectionSpec {
        name: SectionName::Outcomes,
        labels: &["eslrs", "eslr's", "eslr’s"],
        capture: Capture::InlineList,
    },
    SectionSpec {
        name: SectionName::EssentialQuestions,
        labels: &["essential questions"],
        capture: Capture::Block,
    },
    SectionSpec {
        name: SectionName::BiblicalIntegration,
        labels: &["biblical integration"],
        capture: Capture::Block,
    },
    SectionSpec {
        name: SectionName::UnitObjectives,
        labels: &["unit objectives"],
        capture: Capture::Block,
    },
    SectionSpec {
        name: SectionName::LessonObjectives,
        labels: &["lesson objectives"],
        capture: Capture::Block,
    },
];

/// Separators between teacher names, in order of preference
pub const TEACHER_SEPARATORS: &[&str] = &["&amp;", " and "];

/// Raw items per section, as they appeared in the document
///
/// Every section name is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections {
    items: BTreeMap<SectionName, Vec<String>>,
}

impl Sections {
    /// Empty sections for every name
    pub fn new() -> Self {
        Self {
            items: SectionName::ALL
                .into_iter()
                .map(|name| (name, Vec::new()))
                .collect(),
        }
    }

    /// Items of one section
    pub fn get(&self, name: SectionName) -> &[String] {
        self.items.get(&name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Take ownership of one section's items
    pub fn take(&mut self, name: SectionName) -> Vec<String> {
        self.items.get_mut(&name).map(std::mem::take).unwrap_or_default()
    }

    fn push(&mut self, name: SectionName, item: &str) {
        self.items.entry(name).or_default().push(item.to_string());
    }
}

impl Default for Sections {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Capturing(SectionName),
}

/// Slices plan text into sections using a [`SectionSpec`] table
#[derive(Debug, Clone, Copy)]
pub struct SectionScanner<'a> {
    specs: &'a [SectionSpec],
}

impl SectionScanner<'static> {
    /// Scanner over the built-in [`SECTIONS`] table
    pub fn new() -> Self {
        Self { specs: SECTIONS }
    }
}

impl Default for SectionScanner<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> SectionScanner<'a> {
    /// Scanner over a custom table (alternate template variants)
    pub fn with_specs(specs: &'a [SectionSpec]) -> Self {
        Self { specs }
    }

    /// Run the state machine over `lines`
    ///
    /// # Examples
    ///
    /// ```
    /// use lessonbeat_domain::SectionName;
    /// use lessonbeat_extractor::SectionScanner;
    ///
    /// let sections = SectionScanner::new().scan(["ESLRs:", "1. Serve others", "Unit Objectives: Fractions"]);
    /// assert_eq!(sections.get(SectionName::Outcomes), ["1. Serve others"]);
    /// assert_eq!(sections.get(SectionName::UnitObjectives), ["Fractions"]);
    /// ```
    pub fn scan<'l, I>(&self, lines: I) -> Sections
    where
        I: IntoIterator<Item = &'l str>,
    {
        let mut sections = Sections::new();
        let mut state = State::Idle;

        for raw in lines {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            // A label line ends whatever is being captured and is then
            // handled as the begin of its own section.
            if let Some((spec, remainder)) = self.match_label(line) {
                state = begin(spec, remainder, &mut sections);
                continue;
            }

            if let State::Capturing(name) = state {
                sections.push(name, line);
            }
        }

        sections
    }

    /// Convenience wrapper splitting `text` on newlines
    pub fn scan_text(&self, text: &str) -> Sections {
        self.scan(text.lines())
    }

    fn match_label<'l>(&self, line: &'l str) -> Option<(&SectionSpec, &'l str)> {
        self.specs.iter().find_map(|spec| {
            spec.labels
                .iter()
                .filter_map(|label| strip_prefix_ignore_ascii_case(line, label))
                .find(|remainder| !remainder.starts_with(char::is_alphanumeric))
                .map(|remainder| (spec, remainder))
        })
    }
}

/// Enter `spec`'s section with the rest of its label line
fn begin(spec: &SectionSpec, remainder: &str, sections: &mut Sections) -> State {
    let remainder = remainder
        .trim_start_matches(|c: char| c == ':' || c.is_whitespace())
        .trim_end();

    match spec.capture {
        Capture::SingleLine => {
            // Only the first label line of a plan counts.
            if sections.get(spec.name).is_empty() {
                for name in split_teachers(remainder) {
                    sections.push(spec.name, name);
                }
            }
            State::Idle
        }
        Capture::InlineList => {
            for fragment in split_inline_list(remainder) {
                sections.push(spec.name, fragment);
            }
            State::Capturing(spec.name)
        }
        Capture::Block => {
            if !remainder.is_empty() {
                sections.push(spec.name, remainder);
            }
            State::Capturing(spec.name)
        }
    }
}

/// Split an inline list on `;`, else `.`, else keep it whole
fn split_inline_list(remainder: &str) -> Vec<&str> {
    let separator = if remainder.contains(';') {
        ';'
    } else if remainder.contains('.') {
        '.'
    } else {
        return if remainder.is_empty() { Vec::new() } else { vec![remainder] };
    };

    remainder
        .split(separator)
        .map(|fragment| fragment.trim().trim_end_matches('.').trim_end())
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Split the teacher remainder into names
///
/// The course qualifier after the first `/` is dropped, names are separated
/// by the first matching [`TEACHER_SEPARATORS`] entry, and each name is cut at
/// the first `-` or `,` (role or honorific suffixes).
fn split_teachers(remainder: &str) -> Vec<&str> {
    let line = remainder.split('/').next().unwrap_or_default().trim();
    if line.is_empty() {
        return Vec::new();
    }

    let names = match TEACHER_SEPARATORS
        .iter()
        .find(|sep| contains_ignore_ascii_case(line, sep))
    {
        Some(sep) => split_ignore_ascii_case(line, sep),
        None => vec![line],
    };

    names
        .into_iter()
        .map(|name| name.split(['-', ',']).next().unwrap_or_default().trim())
        .filter(|name| !name.is_empty())
        .collect()
}
