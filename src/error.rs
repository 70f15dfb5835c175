//! Error types for cppcheck-diff-filter.
//!
//! Uses thiserror for derive macros. None of these errors reach the process
//! exit code: callers log them and degrade to "no findings".

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for filtering operations.
#[derive(Error, Debug)]
pub enum FilterError {
    /// Git could not be executed or exited unsuccessfully.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// Reading or writing a report file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report is not well-formed XML.
    #[error("Malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The report is well-formed but carries values we cannot interpret.
    #[error("Invalid report: {0}")]
    ReportError(String),
}

impl FilterError {
    /// Build an I/O error tagged with the offending path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FilterError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;
