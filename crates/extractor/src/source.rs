//! The fixed source directory and helpers for naming archives inside it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Extension of the only supported archive format.
pub const ZIP_EXTENSION: &str = "zip";

/// Separator used when a selection is shown as a single line of text.
pub const LIST_SEPARATOR: &str = ", ";

/// The user's downloads directory.
///
/// Uses the platform's standard location, falling back to `~/Downloads` on
/// systems that do not define one.
pub fn downloads_dir() -> Option<PathBuf> {
    dirs::download_dir().or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
}

/// Check whether a path carries the `.zip` extension (case-insensitive).
pub fn is_zip_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(ZIP_EXTENSION))
        .unwrap_or(false)
}

/// List the file names of ZIP archives directly inside `dir`.
///
/// Sorted case-insensitively. Subdirectories are not searched.
pub fn list_archives(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type()?.is_file() || !is_zip_file(&path) {
            continue;
        }

        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            names.push(name.to_string());
        }
    }

    names.sort_by_key(|name| name.to_lowercase());
    Ok(names)
}

/// Split a comma-separated selection into archive names.
///
/// Whitespace around names is trimmed and empty segments are dropped, so a
/// blank selection yields an empty list.
pub fn parse_archive_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join archive names for display in a single text field.
pub fn join_archive_list<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}
