//! Extraction through external helper programs
//!
//! Equivalent to
//! `unzip -p doc.docx word/document.xml | sed -e '<script>'`, with the
//! intermediate markup staged in an anonymous temporary file so each helper
//! can be checked on its own.

use crate::config::{DEFAULT_BODY_MEMBER, DEFAULT_SED_PROGRAM, DEFAULT_UNZIP_PROGRAM};
use crate::error::ExtractionError;
use crate::text::TextExtractor;
use std::io::{Seek, SeekFrom};
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tracing::debug;

/// Paragraph ends to newlines, drop tags, drop non-printable runs
const SED_SCRIPT: &str = r"s/<\/w:p>/\n/g; s/<[^>]\{1,\}>//g; s/[^[:print:]\n]\{1,\}//g";

/// Runs `unzip` then `sed` to filter a document into plain text
#[derive(Debug, Clone)]
pub struct CommandExtractor {
    unzip_program: String,
    sed_program: String,
    body_member: String,
}

impl CommandExtractor {
    /// Create an extractor with explicit helper programs
    pub fn new(
        unzip_program: impl Into<String>,
        sed_program: impl Into<String>,
        body_member: impl Into<String>,
    ) -> Self {
        Self {
            unzip_program: unzip_program.into(),
            sed_program: sed_program.into(),
            body_member: body_member.into(),
        }
    }

    fn check(&self, program: &str, path: &Path, output: &Output) -> Result<(), ExtractionError> {
        if output.status.success() {
            return Ok(());
        }
        Err(ExtractionError::Filter {
            program: program.to_string(),
            path: path.to_path_buf(),
            status: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

impl Default for CommandExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_UNZIP_PROGRAM, DEFAULT_SED_PROGRAM, DEFAULT_BODY_MEMBER)
    }
}

impl TextExtractor for CommandExtractor {
    fn extract_text(&self, path: &Path) -> Result<String, ExtractionError> {
        // Unlinked on creation; the OS reclaims it when the last handle drops,
        // whichever way this function returns.
        let mut staged = tempfile::tempfile().map_err(ExtractionError::Staging)?;
        let unzip_stdout = staged.try_clone().map_err(ExtractionError::Staging)?;

        let unzip = Command::new(&self.unzip_program)
            .arg("-p")
            .arg(path)
            .arg(&self.body_member)
            .stdin(Stdio::null())
            .stdout(Stdio::from(unzip_stdout))
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| ExtractionError::Spawn {
                program: self.unzip_program.clone(),
                source,
            })?;
        self.check(&self.unzip_program, path, &unzip)?;

        staged.seek(SeekFrom::Start(0)).map_err(ExtractionError::Staging)?;

        let sed = Command::new(&self.sed_program)
            .arg("-e")
            .arg(SED_SCRIPT)
            .stdin(Stdio::from(staged))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| ExtractionError::Spawn {
                program: self.sed_program.clone(),
                source,
            })?;
        self.check(&self.sed_program, path, &sed)?;

        debug!(path = %path.display(), bytes = sed.stdout.len(), "Filtered document body");
        Ok(String::from_utf8_lossy(&sed.stdout).into_owned())
    }
}
