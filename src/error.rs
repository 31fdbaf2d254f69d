//! Unified error types for chatlens.
//!
//! The analytical core is total: every aggregation returns a (possibly empty)
//! table for any input string sequence. Errors therefore only arise at the
//! I/O boundaries: reading the chat export, writing rendered tables, and the
//! optional backup copy.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
///
/// Each variant carries context about what went wrong and, where applicable,
/// the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred while reading the export or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV writing error when rendering a result table.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error when rendering a result table.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The backup copy of the raw export could not be stored.
    ///
    /// This error is always caught at the CLI boundary; it never interrupts
    /// the analytical path.
    #[error("Backup to {} failed: {source}", destination.display())]
    Backup {
        /// Destination directory of the failed copy.
        destination: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl ChatlensError {
    /// Creates a backup error from a destination path and an I/O failure.
    pub fn backup(destination: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatlensError::Backup {
            destination: destination.into(),
            source,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is a backup error.
    pub fn is_backup(&self) -> bool {
        matches!(self, ChatlensError::Backup { .. })
    }
}
