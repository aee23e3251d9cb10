//! Error types for harvesting

use lessonbeat_extractor::ExtractionError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Per-entry failures reported while walking a tree
///
/// None of these stop the walk; the scanner yields them and moves on.
#[derive(Error, Debug)]
pub enum ScanError {
    /// A directory could not be listed or an entry could not be visited
    #[error("Traversal failed at {}: {source}", display_opt(.path))]
    Traversal {
        /// Offending path, when the walker knows it
        path: Option<PathBuf>,
        /// Underlying walker error
        #[source]
        source: walkdir::Error,
    },

    /// Modification time of an entry could not be read
    #[error("Failed to read metadata of {}: {source}", .path.display())]
    Metadata {
        /// Entry path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Text extraction failed for one document
    #[error("Extraction failed for {}: {source}", .path.display())]
    Extraction {
        /// Document path
        path: PathBuf,
        /// Underlying extraction error
        #[source]
        source: ExtractionError,
    },
}

impl ScanError {
    /// Path of the entry this error belongs to
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Traversal { path, .. } => path.as_deref(),
            Self::Metadata { path, .. } | Self::Extraction { path, .. } => Some(path),
        }
    }

    /// Short machine-readable kind, logged alongside the path
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Traversal { .. } => "traversal",
            Self::Metadata { .. } => "metadata",
            Self::Extraction { source, .. } => source.kind(),
        }
    }

    /// True if the error means no further document can be processed
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Extraction { source, .. } if source.is_fatal())
    }
}

fn display_opt(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<unknown>".to_string())
}

/// Errors raised by the bundled record sinks
#[derive(Error, Debug)]
pub enum SinkError {
    /// Event could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Output stream rejected the write
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Errors that can occur during harvesting
#[derive(Error, Debug)]
pub enum HarvestError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error (config files, output streams)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML parse error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A cycle had to stop because extraction cannot run at all
    #[error("Cycle aborted: {0}")]
    FatalExtraction(#[source] ScanError),

    /// Worker error (tokio runtime issues)
    #[error("Worker error: {0}")]
    Worker(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_fatality_passes_through() {
        let fatal = ScanError::Extraction {
            path: PathBuf::from("a.docx"),
            source: ExtractionError::Spawn {
                program: "unzip".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "missing"),
            },
        };
        assert!(fatal.is_fatal());

        let per_file = ScanError::Extraction {
            path: PathBuf::from("b.docx"),
            source: ExtractionError::MissingBody {
                path: PathBuf::from("b.docx"),
                member: "word/document.xml".to_string(),
            },
        };
        assert!(!per_file.is_fatal());
        assert_eq!(per_file.path(), Some(std::path::Path::new("b.docx")));
    }

    #[test]
    fn test_metadata_error_is_not_fatal() {
        let err = ScanError::Metadata {
            path: PathBuf::from("c.docx"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!err.is_fatal());
        assert_eq!(err.kind(), "metadata");
        assert!(err.to_string().contains("c.docx"));
    }

    #[test]
    fn test_kind_names_the_failure() {
        let extraction = ScanError::Extraction {
            path: PathBuf::from("d.docx"),
            source: ExtractionError::Archive {
                path: PathBuf::from("d.docx"),
                message: "invalid Zip archive".to_string(),
            },
        };
        assert_eq!(extraction.kind(), "archive");

        let walk_err = walkdir::WalkDir::new("/lessonbeat/no/such/root")
            .into_iter()
            .find_map(Result::err)
            .unwrap();
        let traversal = ScanError::Traversal {
            path: walk_err.path().map(PathBuf::from),
            source: walk_err,
        };
        assert_eq!(traversal.kind(), "traversal");
        assert!(!traversal.is_fatal());
    }
}
