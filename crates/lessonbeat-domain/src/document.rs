//! Document references produced by directory traversal

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// One candidate document found while walking the source tree
///
/// Immutable; created per traversal visit and discarded once the file has
/// been processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    /// Absolute (or root-joined) path of the file
    pub path: PathBuf,

    /// Display name used in records: the path relative to the scan root
    pub filename: String,

    /// Last modification time reported by the filesystem
    pub modified_at: SystemTime,
}

impl DocumentRef {
    /// Create a reference whose filename is `path` relative to `root`
    ///
    /// Falls back to the full path when `path` does not live under `root`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lessonbeat_domain::DocumentRef;
    /// use std::time::SystemTime;
    ///
    /// let doc = DocumentRef::new("/plans", "/plans/grade5/week1.docx", SystemTime::UNIX_EPOCH);
    /// assert_eq!(doc.filename, "grade5/week1.docx");
    /// ```
    pub fn new(root: impl AsRef<Path>, path: impl Into<PathBuf>, modified_at: SystemTime) -> Self {
        let path = path.into();
        let relative = path.strip_prefix(root.as_ref()).unwrap_or(&path);
        let filename = relative.to_string_lossy().replace('\\', "/");

        Self {
            filename,
            path,
            modified_at,
        }
    }

    /// True if the document changed strictly after `cutoff`
    pub fn is_modified_after(&self, cutoff: SystemTime) -> bool {
        self.modified_at > cutoff
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_filename_relative_to_root() {
        let doc = DocumentRef::new("/data/plans", "/data/plans/a/b.docx", SystemTime::UNIX_EPOCH);
        assert_eq!(doc.filename, "a/b.docx");
        assert_eq!(doc.path, PathBuf::from("/data/plans/a/b.docx"));
    }

    #[test]
    fn test_filename_outside_root() {
        let doc = DocumentRef::new("/elsewhere", "/data/b.docx", SystemTime::UNIX_EPOCH);
        assert!(doc.filename.ends_with("b.docx"));
    }

    #[test]
    fn test_cutoff_is_strict() {
        let t = SystemTime::UNIX_EPOCH + Duration::from_secs(100);
        let doc = DocumentRef::new("/", "/x.docx", t);
        assert!(!doc.is_modified_after(t));
        assert!(doc.is_modified_after(t - Duration::from_secs(1)));
        assert!(!doc.is_modified_after(t + Duration::from_secs(1)));
    }
}
