//! ZIP extraction from the fixed source directory.

use crate::error::ExtractError;
use crate::source::downloads_dir;
use crate::types::ExtractStats;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};
use zip::ZipArchive;

/// Extracts archives found in one source directory.
///
/// Archive names are joined onto the source directory as given; they are
/// expected to be bare file names.
#[derive(Debug, Clone)]
pub struct Extractor {
    source_dir: PathBuf,
}

impl Extractor {
    /// Extractor reading from the user's downloads directory.
    pub fn from_downloads() -> Self {
        let source_dir = downloads_dir().unwrap_or_else(|| {
            warn!("could not determine the downloads directory");
            PathBuf::from("Downloads")
        });
        Self { source_dir }
    }

    /// Extractor reading from an explicit directory.
    pub fn with_source_dir(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
        }
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Full path an archive name resolves to.
    pub fn resolve(&self, archive_name: &str) -> PathBuf {
        self.source_dir.join(archive_name)
    }

    /// Extract `archive_name` into `destination_dir`, reporting only whether
    /// it worked.
    ///
    /// Missing files, invalid archives and I/O errors all yield `false`.
    pub fn extract(&self, archive_name: &str, destination_dir: &Path) -> bool {
        match self.try_extract(archive_name, destination_dir) {
            Ok(_) => true,
            Err(e) => {
                warn!(archive = archive_name, error = %e, "extraction failed");
                false
            }
        }
    }

    /// Extract `archive_name` into `destination_dir`.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::NotFound`] if the resolved path does not exist
    /// - [`ExtractError::InvalidArchive`] if it is not a readable ZIP
    /// - [`ExtractError::Io`] if creating directories or writing entries fails
    pub fn try_extract(
        &self,
        archive_name: &str,
        destination_dir: &Path,
    ) -> Result<ExtractStats, ExtractError> {
        extract_archive(&self.resolve(archive_name), destination_dir)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::from_downloads()
    }
}

/// Extract the ZIP at `archive_path` into `output_dir`.
///
/// The archive is opened and its central directory parsed before anything is
/// written, so a missing or invalid archive leaves the filesystem untouched.
/// Existing files are overwritten. Entry names are cleaned so that every
/// entry lands inside `output_dir`. Entries already written stay on disk if
/// a later entry fails.
pub fn extract_archive(
    archive_path: &Path,
    output_dir: &Path,
) -> Result<ExtractStats, ExtractError> {
    let start_time = Instant::now();

    if !archive_path.exists() {
        return Err(ExtractError::NotFound(archive_path.to_path_buf()));
    }
    if archive_path.is_dir() {
        return Err(ExtractError::InvalidArchive(format!(
            "{} is a directory",
            archive_path.display()
        )));
    }

    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))
        .map_err(|e| ExtractError::InvalidArchive(e.to_string()))?;

    debug!(
        archive = %archive_path.display(),
        entries = archive.len(),
        "opened archive"
    );

    fs::create_dir_all(output_dir)?;

    let mut stats = ExtractStats::default();

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;

        // Root, drive and `..` components are dropped, keeping the entry
        // inside the destination
        let relative_path = entry.mangled_name();
        if relative_path.as_os_str().is_empty() {
            debug!(entry = entry.name(), "skipping entry with an empty name");
            continue;
        }
        let output_path = output_dir.join(relative_path);

        if entry.is_dir() {
            fs::create_dir_all(&output_path)?;
            stats.directories_created += 1;
            continue;
        }

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut output_file = File::create(&output_path)?;
        let written = io::copy(&mut entry, &mut output_file)?;

        debug!(entry = %output_path.display(), bytes = written, "extracted entry");

        stats.files_extracted += 1;
        stats.bytes_written += written;
    }

    stats.duration = start_time.elapsed();

    info!(
        archive = %archive_path.display(),
        files = stats.files_extracted,
        bytes = stats.bytes_written,
        "extracted archive"
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_joins_source_dir() {
        let extractor = Extractor::with_source_dir("/home/user/Downloads");
        assert_eq!(
            extractor.resolve("photos.zip"),
            Path::new("/home/user/Downloads/photos.zip")
        );
    }

    #[test]
    fn test_directory_is_not_an_archive() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("folder.zip")).unwrap();
        let output_dir = temp_dir.path().join("out");

        let result = extract_archive(&temp_dir.path().join("folder.zip"), &output_dir);
        assert!(matches!(result, Err(ExtractError::InvalidArchive(_))));
        assert!(!output_dir.exists());
    }

    #[test]
    fn test_empty_file_is_not_an_archive() {
        let temp_dir = TempDir::new().unwrap();
        let archive_path = temp_dir.path().join("empty.zip");
        fs::write(&archive_path, b"").unwrap();

        let result = extract_archive(&archive_path, &temp_dir.path().join("out"));
        assert!(matches!(result, Err(ExtractError::InvalidArchive(_))));
    }
}
