//! Error types for archive extraction and batch runs.

use std::path::PathBuf;
use thiserror::Error;

/// Why a single archive could not be extracted.
///
/// Every variant is counted as one failure by the batch controller; the user
/// only ever sees the aggregated counts.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Archive file not found at the resolved path.
    #[error("Archive not found: {0}")]
    NotFound(PathBuf),

    /// The file exists but is not a well-formed ZIP archive.
    #[error("Invalid archive: {0}")]
    InvalidArchive(String),

    /// An I/O error occurred while creating directories or writing entries.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<zip::result::ZipError> for ExtractError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(io_err) => ExtractError::Io(io_err),
            other => ExtractError::InvalidArchive(other.to_string()),
        }
    }
}

/// A batch was rejected before any archive was attempted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchError {
    /// The selection contained no archive names.
    #[error("No ZIP archives selected")]
    NoArchivesSelected,

    /// No destination folder was chosen.
    #[error("No destination folder selected")]
    NoDestination,
}
