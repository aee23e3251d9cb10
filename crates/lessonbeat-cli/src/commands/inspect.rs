//! Inspect command implementation.

use crate::cli::{BackendArg, InspectArgs};
use crate::error::Result;
use crate::output::Formatter;
use lessonbeat_domain::{DocumentRef, LessonPlanRecord};
use lessonbeat_extractor::{ExtractorConfig, RecordBuilder, TextExtractor};
use std::fs;
use std::path::Path;

/// Execute the inspect command.
pub fn execute_inspect(args: InspectArgs, formatter: &Formatter) -> Result<()> {
    if args.raw {
        print!("{}", extract(&args.file, args.backend)?);
        return Ok(());
    }

    let records = inspect_records(&args.file, args.backend)?;
    if records.is_empty() {
        eprintln!(
            "{}",
            formatter.warning(&format!("{} does not contain a daily lesson plan", args.file.display()))
        );
        return Ok(());
    }

    for record in &records {
        println!("{}", formatter.format_record_detail(record)?);
    }
    Ok(())
}

/// Parse every plan in one document.
pub fn inspect_records(file: &Path, backend: BackendArg) -> Result<Vec<LessonPlanRecord>> {
    let modified_at = fs::metadata(file)?.modified()?;
    let text = extract(file, backend)?;

    let root = file.parent().unwrap_or_else(|| Path::new(""));
    let doc = DocumentRef::new(root, file, modified_at);
    Ok(RecordBuilder::new().build_records(&text, &doc))
}

fn extract(file: &Path, backend: BackendArg) -> Result<String> {
    let config = ExtractorConfig {
        backend: backend.into(),
        ..ExtractorConfig::default()
    };
    Ok(config.build().extract_text(file)?)
}
