//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use walkdir::WalkDir;
use zip::write::{SimpleFileOptions, ZipWriter};

/// Write a ZIP archive containing `files` at `path`.
pub fn create_zip(path: &Path, files: &[(&str, &[u8])]) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut zip = ZipWriter::new(file);

    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for (name, content) in files {
        zip.start_file(*name, options)?;
        zip.write_all(content)?;
    }

    zip.finish()?;
    Ok(())
}

/// The two-entry archive used throughout the tests.
pub fn create_good_zip(path: &Path) -> std::io::Result<()> {
    create_zip(path, &[("a.txt", b"alpha"), ("sub/b.txt", b"bravo")])
}

/// A text file wearing a `.zip` name.
pub fn create_fake_zip(path: &Path) -> std::io::Result<()> {
    std::fs::write(path, "this is not an archive\n")
}

/// Relative paths of every regular file under `root`.
pub fn files_under(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

/// Number of filesystem entries (files and directories) under `root`.
pub fn entry_count(root: &Path) -> usize {
    WalkDir::new(root).min_depth(1).into_iter().count()
}
