//! Output formatting for the CLI.

use crate::cli::CliFormat;
use crate::error::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use colored::{Color, Colorize};
use lessonbeat_domain::{LessonPlanRecord, SectionName};
use lessonbeat_harvester::{HarvestMetrics, LessonPlanEvent};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: CliFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: CliFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> CliFormat {
        self.format
    }

    /// Format a list of records.
    pub fn format_records(&self, records: &[LessonPlanRecord]) -> Result<String> {
        match self.format {
            CliFormat::Json => self.format_records_json(records),
            CliFormat::Table => Ok(self.format_records_table(records)),
            CliFormat::Quiet => Ok(self.format_records_quiet(records)),
        }
    }

    /// Format every section of a single record.
    pub fn format_record_detail(&self, record: &LessonPlanRecord) -> Result<String> {
        if self.format != CliFormat::Table {
            return self.format_records(std::slice::from_ref(record));
        }

        let mut builder = Builder::default();
        builder.push_record(["Section", "Items"]);
        builder.push_record(["filename".to_string(), record.filename.clone()]);
        builder.push_record(["modified".to_string(), format_time(record)]);
        for name in SectionName::ALL {
            builder.push_record([name.as_str().to_string(), record.section(name).join("\n")]);
        }
        builder.push_record(["eslr_num".to_string(), record.outcome_count().to_string()]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format records as JSON lines.
    fn format_records_json(&self, records: &[LessonPlanRecord]) -> Result<String> {
        let now = Utc::now();
        let lines = records
            .iter()
            .map(|record| serde_json::to_string(&LessonPlanEvent::new(record, now)))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(lines.join("\n"))
    }

    /// Format records as a table.
    fn format_records_table(&self, records: &[LessonPlanRecord]) -> String {
        if records.is_empty() {
            return self.colorize("No lesson plans found.", Color::Yellow);
        }

        let mut builder = Builder::default();
        builder.push_record(["Filename", "Modified", "Teachers", "ESLRs", "Objectives"]);

        for record in records {
            builder.push_record([
                record.filename.clone(),
                format_time(record),
                record.teachers.join(", "),
                record.outcome_count().to_string(),
                (record.unit_objectives.len() + record.lesson_objectives.len()).to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format records in quiet mode (filenames only).
    fn format_records_quiet(&self, records: &[LessonPlanRecord]) -> String {
        let names: Vec<&str> = records.iter().map(|r| r.filename.as_str()).collect();
        names.join("\n")
    }

    /// Format a cycle summary.
    pub fn summary(&self, metrics: &HarvestMetrics) -> String {
        let message = format!(
            "{} record(s) from {} document(s), {} without a lesson plan, {} skipped",
            metrics.records_published,
            metrics.documents_scanned,
            metrics.template_mismatches,
            metrics.skipped + metrics.publish_failures,
        );
        if metrics.skipped + metrics.publish_failures > 0 {
            self.warning(&message)
        } else {
            self.success(&message)
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), Color::Green)
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), Color::Yellow)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: Color) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        text.color(color).to_string()
    }
}

fn format_time(record: &LessonPlanRecord) -> String {
    DateTime::<Utc>::from(record.modified_at).to_rfc3339_opts(SecondsFormat::Secs, true)
}
