//! In-process extraction from the ZIP container

use crate::config::DEFAULT_BODY_MEMBER;
use crate::error::ExtractionError;
use crate::text::{strip_markup, TextExtractor};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

/// Largest document body read into memory
pub const MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;

/// Reads the document body straight out of the `.docx` archive
///
/// The body member is buffered in memory only for the duration of one call,
/// and never beyond [`MAX_BODY_BYTES`] regardless of what the archive claims.
#[derive(Debug, Clone)]
pub struct DocxExtractor {
    body_member: String,
    max_body_bytes: u64,
}

impl DocxExtractor {
    /// Create an extractor reading `body_member` from each container
    pub fn new(body_member: impl Into<String>) -> Self {
        Self {
            body_member: body_member.into(),
            max_body_bytes: MAX_BODY_BYTES,
        }
    }

    /// Override the body size limit
    pub fn with_max_body_bytes(mut self, limit: u64) -> Self {
        self.max_body_bytes = limit;
        self
    }
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_BODY_MEMBER)
    }
}

impl TextExtractor for DocxExtractor {
    fn extract_text(&self, path: &Path) -> Result<String, ExtractionError> {
        let file = File::open(path).map_err(|source| ExtractionError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut archive = ZipArchive::new(BufReader::new(file)).map_err(|e| ExtractionError::Archive {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut member = match archive.by_name(&self.body_member) {
            Ok(member) => member,
            Err(ZipError::FileNotFound) => {
                return Err(ExtractionError::MissingBody {
                    path: path.to_path_buf(),
                    member: self.body_member.clone(),
                })
            }
            Err(e) => {
                return Err(ExtractionError::Archive {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };

        let oversized = || ExtractionError::Oversized {
            path: path.to_path_buf(),
            limit: self.max_body_bytes,
        };

        // Header sizes are untrusted; check them, then bound the actual read too
        if member.size() > self.max_body_bytes {
            return Err(oversized());
        }

        let mut markup = Vec::new();
        member
            .by_ref()
            .take(self.max_body_bytes.saturating_add(1))
            .read_to_end(&mut markup)
            .map_err(|source| ExtractionError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        if markup.len() as u64 > self.max_body_bytes {
            return Err(oversized());
        }

        Ok(strip_markup(&String::from_utf8_lossy(&markup)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    fn write_container(dir: &TempDir, name: &str, members: &[(&str, &str)]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut zip = zip::ZipWriter::new(File::create(&path).unwrap());
        let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for (member, contents) in members {
            zip.start_file(*member, options).unwrap();
            zip.write_all(contents.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
        path
    }

    #[test]
    fn test_extracts_body_text() {
        let dir = TempDir::new().unwrap();
        let path = write_container(
            &dir,
            "plan.docx",
            &[
                ("[Content_Types].xml", "<Types/>"),
                ("word/document.xml", "<w:body><w:p><w:t>Daily Lesson Plan</w:t></w:p><w:p><w:t>ESLRs: Serve</w:t></w:p></w:body>"),
            ],
        );

        let text = DocxExtractor::default().extract_text(&path).unwrap();
        assert_eq!(text, "Daily Lesson Plan\nESLRs: Serve\n");
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = DocxExtractor::default()
            .extract_text(&dir.path().join("absent.docx"))
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Open { .. }));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_not_a_container() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fake.docx");
        std::fs::write(&path, "plain text, not a zip").unwrap();

        let err = DocxExtractor::default().extract_text(&path).unwrap_err();
        assert!(matches!(err, ExtractionError::Archive { .. }));
    }

    /// Overwrite the uncompressed size of every header in a stored container
    fn claim_uncompressed_size(path: &std::path::Path, size: u32) {
        let mut bytes = std::fs::read(path).unwrap();
        // (signature, offset of the uncompressed size field)
        for (signature, offset) in [(b"PK\x03\x04", 22), (b"PK\x01\x02", 24)] {
            let at = bytes.windows(4).position(|w| w == signature).unwrap();
            bytes[at + offset..at + offset + 4].copy_from_slice(&size.to_le_bytes());
        }
        std::fs::write(path, bytes).unwrap();
    }

    #[test]
    fn test_claimed_body_size_is_not_trusted() {
        let dir = TempDir::new().unwrap();
        let path = write_container(&dir, "huge.docx", &[("word/document.xml", "<w:p><w:t>Tiny</w:t></w:p>")]);
        claim_uncompressed_size(&path, 0xFFFF_FF00);

        // Rejected before any buffer is sized, by us or by the archive reader
        let err = DocxExtractor::default().extract_text(&path).unwrap_err();
        assert!(matches!(err.kind(), "oversized" | "archive" | "read"), "{err}");
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_body_over_limit() {
        let dir = TempDir::new().unwrap();
        let body = format!("<w:p><w:t>{}</w:t></w:p>", "x".repeat(256));
        let path = write_container(&dir, "long.docx", &[("word/document.xml", &body)]);

        let err = DocxExtractor::default()
            .with_max_body_bytes(64)
            .extract_text(&path)
            .unwrap_err();
        assert_eq!(err.kind(), "oversized");

        let text = DocxExtractor::default()
            .with_max_body_bytes(body.len() as u64)
            .extract_text(&path)
            .unwrap();
        assert_eq!(text.trim_end(), "x".repeat(256));
    }

    #[test]
    fn test_missing_body_member() {
        let dir = TempDir::new().unwrap();
        let path = write_container(&dir, "empty.docx", &[("word/styles.xml", "<w:styles/>")]);

        let err = DocxExtractor::default().extract_text(&path).unwrap_err();
        assert!(matches!(err, ExtractionError::MissingBody { ref member, .. } if member == "word/document.xml"));
    }

    #[test]
    fn test_custom_body_member() {
        let dir = TempDir::new().unwrap();
        let path = write_container(&dir, "alt.docx", &[("word/document2.xml", "<w:p><w:t>Alt</w:t></w:p>")]);

        let text = DocxExtractor::new("word/document2.xml").extract_text(&path).unwrap();
        assert_eq!(text, "Alt\n");
    }
}
