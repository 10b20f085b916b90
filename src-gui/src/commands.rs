use crate::state::AppState;
use rfd::FileDialog;
use std::path::{Path, PathBuf};
use tracing::info;
use zip_extractor::{
    parse_archive_list, BatchError, BatchProgress, BatchReport, BatchRequest, ZIP_EXTENSION,
};

/// Message shown when the user presses Extract without a full selection.
pub const INPUT_ERROR_MESSAGE: &str = "Please select ZIP files and a destination folder.";

/// Let the user pick archives from `source_dir`.
///
/// Returns the base names of the chosen files, or `None` if the dialog was
/// dismissed.
pub fn pick_archives(source_dir: &Path) -> Option<Vec<String>> {
    let files = FileDialog::new()
        .set_title("Select ZIP files")
        .set_directory(source_dir)
        .add_filter("ZIP files", &[ZIP_EXTENSION])
        .pick_files()?;

    let names: Vec<String> = files
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().to_string())
        .collect();

    if names.is_empty() {
        None
    } else {
        Some(names)
    }
}

/// Let the user pick the destination folder, starting from their home directory.
pub fn pick_destination() -> Option<PathBuf> {
    let mut dialog = FileDialog::new().set_title("Select a destination folder");
    if let Some(home) = dirs::home_dir() {
        dialog = dialog.set_directory(home);
    }
    dialog.pick_folder()
}

/// Extract the archives named in `archives_text` into `destination_text`.
///
/// `archives_text` is the comma-separated selection shown in the window.
/// An empty selection or destination is refused with a user-facing message
/// and leaves the session counts untouched.
pub fn extract_selected(
    state: &AppState,
    archives_text: &str,
    destination_text: &str,
    progress: &mut dyn FnMut(BatchProgress),
) -> Result<BatchReport, String> {
    let request = BatchRequest::new(
        parse_archive_list(archives_text),
        destination_text.trim(),
    );

    let report = state
        .session
        .lock()
        .run_batch(&request, progress)
        .map_err(|e| input_error_message(&e))?;

    info!(
        succeeded = report.session.success_count,
        failed = report.session.failure_count,
        "reporting session totals"
    );

    Ok(report)
}

fn input_error_message(e: &BatchError) -> String {
    match e {
        BatchError::NoArchivesSelected | BatchError::NoDestination => {
            INPUT_ERROR_MESSAGE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use zip_extractor::{ExtractionTally, Extractor, Session};

    fn state_for(source_dir: &Path) -> AppState {
        AppState::with_session(Session::with_extractor(Extractor::with_source_dir(
            source_dir,
        )))
    }

    #[test]
    fn test_blank_selection_is_input_error() {
        let temp_dir = TempDir::new().unwrap();
        let state = state_for(temp_dir.path());
        let out = temp_dir.path().join("out");

        let result = extract_selected(&state, "  ", &out.to_string_lossy(), &mut |_| {});

        assert_eq!(result.unwrap_err(), INPUT_ERROR_MESSAGE);
        assert_eq!(state.session.lock().tally(), ExtractionTally::default());
    }

    #[test]
    fn test_blank_destination_is_input_error() {
        let temp_dir = TempDir::new().unwrap();
        let state = state_for(temp_dir.path());

        let result = extract_selected(&state, "a.zip", "", &mut |_| {});

        assert_eq!(result.unwrap_err(), INPUT_ERROR_MESSAGE);
        assert_eq!(state.session.lock().tally(), ExtractionTally::default());
    }

    #[test]
    fn test_selection_text_drives_batch() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("bad.zip"), "plain text").unwrap();
        let state = state_for(temp_dir.path());
        let out = temp_dir.path().join("out");

        let mut last = None;
        let report = extract_selected(
            &state,
            "bad.zip, missing.zip",
            &out.to_string_lossy(),
            &mut |p| last = Some(p),
        )
        .unwrap();

        assert_eq!(report.batch, ExtractionTally::from((0, 2)));
        assert_eq!(last, Some(BatchProgress { processed: 2, total: 2 }));

        let report = extract_selected(&state, "bad.zip", &out.to_string_lossy(), &mut |_| {})
            .unwrap();
        assert_eq!(report.session, ExtractionTally::from((0, 3)));
    }
}
