//! Incremental tree traversal
//!
//! [`TreeScanner::scan`] walks a directory tree and lazily turns every
//! document changed after a cutoff into [`LessonPlanRecord`]s. Failures are
//! yielded per entry so that one bad file or unreadable subtree never hides
//! the rest of the tree.

use crate::ScanError;
use lessonbeat_domain::{DocumentRef, LessonPlanRecord};
use lessonbeat_extractor::{RecordBuilder, TextExtractor};
use std::collections::VecDeque;
use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;
use walkdir::WalkDir;

/// Default document extension
pub const DEFAULT_EXTENSION: &str = "docx";

/// Finds changed documents and runs them through extraction
///
/// # Examples
///
/// ```no_run
/// use lessonbeat_extractor::DocxExtractor;
/// use lessonbeat_harvester::TreeScanner;
/// use std::time::SystemTime;
///
/// let scanner = TreeScanner::new(DocxExtractor::default());
/// for item in scanner.scan("/srv/plans", SystemTime::UNIX_EPOCH) {
///     match item {
///         Ok(record) => println!("{} ({} outcomes)", record.filename, record.outcome_count()),
///         Err(e) => eprintln!("skipped: {}", e),
///     }
/// }
/// ```
pub struct TreeScanner<E> {
    extractor: E,
    builder: RecordBuilder<'static>,
    extension: String,
}

impl<E: TextExtractor> TreeScanner<E> {
    /// Create a scanner for `.docx` files
    pub fn new(extractor: E) -> Self {
        Self {
            extractor,
            builder: RecordBuilder::new(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Match a different file extension (without the dot)
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Walk `root` and yield records for documents modified after `cutoff`
    ///
    /// Nothing is read until the returned iterator is advanced. Entries are
    /// visited in file-name order and symbolic links are not followed.
    pub fn scan(&self, root: impl AsRef<Path>, cutoff: SystemTime) -> Scan<'_, E> {
        let root = root.as_ref().to_path_buf();
        Scan {
            scanner: self,
            entries: WalkDir::new(&root)
                .follow_links(false)
                .sort_by_file_name()
                .into_iter(),
            root,
            cutoff,
            pending: VecDeque::new(),
            stats: ScanStats::default(),
        }
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension))
    }
}

/// Counters for one walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Candidates whose text was extracted
    pub documents: usize,
    /// Extracted documents without the template marker
    pub template_mismatches: usize,
}

/// Lazy iterator returned by [`TreeScanner::scan`]
pub struct Scan<'s, E> {
    scanner: &'s TreeScanner<E>,
    entries: walkdir::IntoIter,
    root: PathBuf,
    cutoff: SystemTime,
    pending: VecDeque<LessonPlanRecord>,
    stats: ScanStats,
}

impl<E> Scan<'_, E> {
    /// Counters accumulated so far
    pub fn stats(&self) -> ScanStats {
        self.stats
    }
}

impl<E: TextExtractor> Scan<'_, E> {
    /// Extract and parse one candidate, queueing its records
    fn process(&mut self, doc: DocumentRef) -> Result<(), ScanError> {
        let text = self
            .scanner
            .extractor
            .extract_text(&doc.path)
            .map_err(|source| ScanError::Extraction {
                path: doc.path.clone(),
                source,
            })?;
        self.stats.documents += 1;

        let records = self.scanner.builder.build_records(&text, &doc);
        if records.is_empty() {
            self.stats.template_mismatches += 1;
        } else {
            debug!(path = %doc.path.display(), plans = records.len(), "Parsed document");
        }
        self.pending.extend(records);
        Ok(())
    }
}

impl<E: TextExtractor> Iterator for Scan<'_, E> {
    type Item = Result<LessonPlanRecord, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.pending.pop_front() {
                return Some(Ok(record));
            }

            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(source) => {
                    // walkdir has already skipped the failed directory;
                    // its siblings come next.
                    return Some(Err(ScanError::Traversal {
                        path: source.path().map(Path::to_path_buf),
                        source,
                    }));
                }
            };

            if entry.file_type().is_dir() || !self.scanner.has_extension(entry.path()) {
                continue;
            }

            let modified_at = match entry
                .metadata()
                .map_err(io::Error::from)
                .and_then(|meta| meta.modified())
            {
                Ok(modified_at) => modified_at,
                Err(source) => {
                    return Some(Err(ScanError::Metadata {
                        path: entry.into_path(),
                        source,
                    }))
                }
            };

            let doc = DocumentRef::new(&self.root, entry.into_path(), modified_at);
            if !doc.is_modified_after(self.cutoff) {
                continue;
            }

            if let Err(e) = self.process(doc) {
                return Some(Err(e));
            }
        }
    }
}
