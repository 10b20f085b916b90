//! Integration tests for archive probing functionality.

mod common;

use common::{create_fake_zip, create_zip};
use tempfile::TempDir;
use zip_extractor::{probe, ExtractError};

#[test]
fn test_probe_lists_entries() {
    let temp_dir = TempDir::new().unwrap();
    let archive_path = temp_dir.path().join("multi.zip");
    create_zip(
        &archive_path,
        &[
            ("file1.txt", b"Content 1"),
            ("nested/file2.txt", b"Content 22"),
        ],
    )
    .unwrap();

    let info = probe(&archive_path).expect("Failed to probe archive");

    assert_eq!(info.entries, 2);
    assert_eq!(info.uncompressed_estimate, 19);
    assert!(info.compressed_bytes > 0);

    let paths: Vec<&str> = info.entry_list.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, vec!["file1.txt", "nested/file2.txt"]);
    assert!(info.entry_list.iter().all(|e| !e.is_directory));
}

#[test]
fn test_probe_empty_archive() {
    let temp_dir = TempDir::new().unwrap();
    let archive_path = temp_dir.path().join("empty.zip");
    create_zip(&archive_path, &[]).unwrap();

    let info = probe(&archive_path).expect("Failed to probe empty archive");

    assert_eq!(info.entries, 0);
    assert_eq!(info.uncompressed_estimate, 0);
    assert!(info.entry_list.is_empty());
}

#[test]
fn test_probe_does_not_extract() {
    let temp_dir = TempDir::new().unwrap();
    let archive_path = temp_dir.path().join("one.zip");
    create_zip(&archive_path, &[("only.txt", b"x")]).unwrap();

    probe(&archive_path).unwrap();

    assert!(!temp_dir.path().join("only.txt").exists());
}

#[test]
fn test_probe_rejects_renamed_text_file() {
    let temp_dir = TempDir::new().unwrap();
    let archive_path = temp_dir.path().join("bad.zip");
    create_fake_zip(&archive_path).unwrap();

    let result = probe(&archive_path);
    assert!(matches!(result, Err(ExtractError::InvalidArchive(_))));
}

#[test]
fn test_probe_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = probe(&temp_dir.path().join("missing.zip"));
    assert!(matches!(result, Err(ExtractError::NotFound(_))));
}
