//! Archive probing functionality for reading metadata without extraction.

use crate::error::ExtractError;
use crate::types::{ArchiveEntry, ArchiveInfo};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read the central directory of the ZIP at `path`.
///
/// # Errors
///
/// Returns an error if:
/// - The archive file doesn't exist
/// - The file is not a readable ZIP archive
pub fn probe_archive(path: &Path) -> Result<ArchiveInfo, ExtractError> {
    if !path.exists() {
        return Err(ExtractError::NotFound(path.to_path_buf()));
    }

    let compressed_bytes = std::fs::metadata(path)?.len();

    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(BufReader::new(file))
        .map_err(|e| ExtractError::InvalidArchive(e.to_string()))?;

    let mut entry_list = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let entry = archive.by_index_raw(i)?;
        entry_list.push(ArchiveEntry {
            path: entry.name().to_string(),
            is_directory: entry.is_dir(),
            size: entry.size(),
            compressed_size: entry.compressed_size(),
        });
    }

    Ok(ArchiveInfo {
        entries: entry_list.len() as u64,
        compressed_bytes,
        uncompressed_estimate: entry_list.iter().map(|e| e.size).sum(),
        entry_list,
    })
}
