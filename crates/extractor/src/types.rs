//! Type definitions for archive extraction and batch accounting.

use crate::error::ExtractError;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Individual entry within an archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveEntry {
    /// Path of the entry within the archive
    pub path: String,

    /// Whether this entry is a directory
    pub is_directory: bool,

    /// Uncompressed size in bytes
    pub size: u64,

    /// Compressed size in bytes
    pub compressed_size: u64,
}

/// Metadata information about a ZIP archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveInfo {
    /// Number of entries in the archive
    pub entries: u64,

    /// Size of the archive file on disk
    pub compressed_bytes: u64,

    /// Sum of the uncompressed entry sizes
    pub uncompressed_estimate: u64,

    /// List of all entries in the archive
    pub entry_list: Vec<ArchiveEntry>,
}

/// Statistics about one successfully extracted archive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractStats {
    /// Number of file entries written
    pub files_extracted: u64,

    /// Number of directory entries created
    pub directories_created: u64,

    /// Total bytes written to disk
    pub bytes_written: u64,

    /// Wall-clock time spent on the archive (in milliseconds)
    #[serde(with = "duration_ms")]
    pub duration: Duration,
}

/// Success and failure counters.
///
/// The session-wide instance starts at zero and is never reset, so after any
/// number of batches `total()` equals the number of archive names submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionTally {
    pub success_count: u64,
    pub failure_count: u64,
}

impl ExtractionTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one attempt.
    pub fn record(&mut self, succeeded: bool) {
        if succeeded {
            self.success_count += 1;
        } else {
            self.failure_count += 1;
        }
    }

    pub fn total(&self) -> u64 {
        self.success_count + self.failure_count
    }
}

/// The result summary shown to the user after each batch.
impl fmt::Display for ExtractionTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Extracted: {} archive(s)\nFailed attempts: {}",
            self.success_count, self.failure_count
        )
    }
}

impl From<(u64, u64)> for ExtractionTally {
    fn from((success_count, failure_count): (u64, u64)) -> Self {
        Self {
            success_count,
            failure_count,
        }
    }
}

/// The archives one batch should extract.
#[derive(Debug, Clone, Default)]
pub struct BatchRequest {
    /// Archive file names, resolved against the source directory
    pub archive_names: Vec<String>,

    /// Directory every archive is extracted into
    pub destination_dir: PathBuf,
}

impl BatchRequest {
    pub fn new<I, S>(archive_names: I, destination_dir: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            archive_names: archive_names.into_iter().map(Into::into).collect(),
            destination_dir: destination_dir.into(),
        }
    }
}

/// Whole-archive progress within a single batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProgress {
    /// Archives attempted so far in this batch
    pub processed: usize,

    /// Number of archives in this batch
    pub total: usize,
}

/// Result of extracting one archive inside a batch.
#[derive(Debug)]
pub struct ArchiveOutcome {
    pub archive_name: String,
    pub result: Result<ExtractStats, ExtractError>,
}

impl ArchiveOutcome {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

impl Serialize for ArchiveOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ArchiveOutcome", 4)?;
        state.serialize_field("archive", &self.archive_name)?;
        match &self.result {
            Ok(stats) => {
                state.serialize_field("status", "success")?;
                state.serialize_field("stats", &Some(stats))?;
                state.serialize_field("error", &None::<String>)?;
            }
            Err(e) => {
                state.serialize_field("status", "failed")?;
                state.serialize_field("stats", &None::<&ExtractStats>)?;
                state.serialize_field("error", &Some(e.to_string()))?;
            }
        }
        state.end()
    }
}

/// Summary of a completed batch.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    /// Counts contributed by this batch alone
    pub batch: ExtractionTally,

    /// Cumulative counts for the session, including this batch
    pub session: ExtractionTally,

    /// Per-archive detail in submission order
    pub outcomes: Vec<ArchiveOutcome>,
}

impl BatchReport {
    pub fn failures(&self) -> impl Iterator<Item = &ArchiveOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded())
    }
}

// Helper module for Duration serialization
mod duration_ms {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
