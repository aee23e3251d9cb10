//! Error types for text extraction

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while pulling plain text out of a document
///
/// Every variant is scoped to a single file. Callers skip the file and keep
/// going, except for [`ExtractionError::is_fatal`] errors, which mean the
/// host cannot run extraction at all right now.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The file could not be opened
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        /// Document path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The file is not a readable document container
    #[error("Not a document container {}: {message}", .path.display())]
    Archive {
        /// Document path
        path: PathBuf,
        /// Description from the archive reader
        message: String,
    },

    /// The container has no document body member
    #[error("Document body '{member}' not found in {}", .path.display())]
    MissingBody {
        /// Document path
        path: PathBuf,
        /// Member that was looked up
        member: String,
    },

    /// The document body could not be read
    #[error("Failed to read document body of {}: {source}", .path.display())]
    Read {
        /// Document path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The document body is larger than the extractor accepts
    #[error("Document body of {} exceeds {limit} bytes", .path.display())]
    Oversized {
        /// Document path
        path: PathBuf,
        /// Configured limit in bytes
        limit: u64,
    },

    /// An extraction helper could not be started
    #[error("Failed to spawn '{program}': {source}")]
    Spawn {
        /// Program that failed to start
        program: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Temporary staging storage could not be created or rewound
    #[error("Failed to stage intermediate output: {0}")]
    Staging(#[source] io::Error),

    /// An extraction helper ran but reported failure
    #[error("'{program}' failed on {} (exit status {status:?}): {stderr}", .path.display())]
    Filter {
        /// Program that failed
        program: String,
        /// Document path
        path: PathBuf,
        /// Exit code, if the process exited normally
        status: Option<i32>,
        /// Captured standard error, trimmed
        stderr: String,
    },
}

impl ExtractionError {
    /// True when the failure is about the host, not the document
    ///
    /// Fatal errors abort the current scan cycle; everything else skips one file.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ExtractionError::Spawn { .. } | ExtractionError::Staging(_))
    }

    /// Short machine-readable kind, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractionError::Open { .. } => "open",
            ExtractionError::Archive { .. } => "archive",
            ExtractionError::MissingBody { .. } => "missing_body",
            ExtractionError::Read { .. } => "read",
            ExtractionError::Oversized { .. } => "oversized",
            ExtractionError::Spawn { .. } => "spawn",
            ExtractionError::Staging(_) => "staging",
            ExtractionError::Filter { .. } => "filter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_host_failures_are_fatal() {
        let spawn = ExtractionError::Spawn {
            program: "unzip".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(spawn.is_fatal());
        assert_eq!(spawn.kind(), "spawn");

        let missing = ExtractionError::MissingBody {
            path: PathBuf::from("a.docx"),
            member: "word/document.xml".to_string(),
        };
        assert!(!missing.is_fatal());
        assert!(missing.to_string().contains("a.docx"));
    }
}
