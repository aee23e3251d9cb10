//! Plain-text extraction seam

use crate::error::ExtractionError;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

/// Closing tag of a WordprocessingML paragraph
const PARAGRAPH_END: &str = "</w:p>";

/// Trait for turning a document file into plain text
///
/// Implemented by [`DocxExtractor`](crate::DocxExtractor) and
/// [`CommandExtractor`](crate::CommandExtractor); tests substitute fakes.
/// Output has one line per paragraph.
pub trait TextExtractor {
    /// Extract the plain-text body of the document at `path`
    fn extract_text(&self, path: &Path) -> Result<String, ExtractionError>;
}

impl<T: TextExtractor + ?Sized> TextExtractor for &T {
    fn extract_text(&self, path: &Path) -> Result<String, ExtractionError> {
        (**self).extract_text(path)
    }
}

impl<T: TextExtractor + ?Sized> TextExtractor for Box<T> {
    fn extract_text(&self, path: &Path) -> Result<String, ExtractionError> {
        (**self).extract_text(path)
    }
}

/// Reduce document body markup to plain text
///
/// Paragraph ends become newlines, every other tag is removed, and control
/// characters other than `\n` are dropped. Character entities are left as
/// they are (`&amp;` stays literal).
///
/// # Examples
///
/// ```
/// use lessonbeat_extractor::strip_markup;
///
/// let xml = "<w:p><w:r><w:t>ESLRs:</w:t></w:r></w:p><w:p><w:t>Serve</w:t></w:p>";
/// assert_eq!(strip_markup(xml), "ESLRs:\nServe\n");
/// ```
pub fn strip_markup(markup: &str) -> String {
    let with_breaks = markup.replace(PARAGRAPH_END, "\n");
    TAG_RE
        .replace_all(&with_breaks, "")
        .chars()
        .filter(|c| *c == '\n' || !c.is_control())
        .collect()
}
