//! # ZIP Extractor
//!
//! Batch extraction of ZIP archives from the user's downloads directory.
//!
//! An [`Extractor`] resolves bare archive names against a fixed source
//! directory and unpacks them one at a time. [`run_batch`] drives it over a
//! selection and counts successes and failures into an [`ExtractionTally`];
//! a [`Session`] owns that tally for the lifetime of the application, so
//! counts accumulate across batches.
//!
//! ## Example
//!
//! ```rust,no_run
//! use zip_extractor::{BatchRequest, Session};
//!
//! let mut session = Session::new();
//! let request = BatchRequest::new(["photos.zip", "docs.zip"], "/tmp/unpacked");
//!
//! match session.run_batch(&request, &mut |p| println!("{}/{}", p.processed, p.total)) {
//!     Ok(report) => println!(
//!         "extracted {}, failed {}",
//!         report.session.success_count, report.session.failure_count
//!     ),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

pub mod batch;
pub mod error;
pub mod extract;
pub mod probe;
pub mod session;
pub mod source;
pub mod types;

// Re-export main types
pub use batch::{run_batch, validate_request};
pub use error::{BatchError, ExtractError};
pub use extract::{extract_archive, Extractor};
pub use session::Session;
pub use source::{
    downloads_dir, is_zip_file, join_archive_list, list_archives, parse_archive_list, ZIP_EXTENSION,
};
pub use types::{
    ArchiveEntry, ArchiveInfo, ArchiveOutcome, BatchProgress, BatchReport, BatchRequest,
    ExtractStats, ExtractionTally,
};

use std::path::Path;

/// Probe a ZIP archive to retrieve metadata without extracting.
///
/// # Errors
///
/// Returns an error if the file doesn't exist or is not a readable ZIP.
pub fn probe(path: &Path) -> Result<ArchiveInfo, ExtractError> {
    probe::probe_archive(path)
}
