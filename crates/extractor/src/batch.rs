//! Batch controller: runs the extractor over a selection and keeps count.

use crate::error::BatchError;
use crate::extract::Extractor;
use crate::types::{ArchiveOutcome, BatchProgress, BatchReport, BatchRequest, ExtractionTally};
use tracing::{info, warn};

/// Reject a request that names no archives or no destination.
pub fn validate_request(request: &BatchRequest) -> Result<(), BatchError> {
    if request.archive_names.is_empty() {
        return Err(BatchError::NoArchivesSelected);
    }
    if request.destination_dir.as_os_str().is_empty() {
        return Err(BatchError::NoDestination);
    }
    Ok(())
}

/// Extract every archive in `request`, in order, counting into `tally`.
///
/// Each name is attempted exactly once; a failure never stops the batch.
/// `progress` is called with `processed == 0` before the first attempt and
/// again after every attempt.
///
/// `tally` is added to, not reset, so callers that keep one tally for the
/// whole session get cumulative counts in [`BatchReport::session`].
///
/// # Errors
///
/// Returns a [`BatchError`] without touching `tally` if the request is empty.
pub fn run_batch(
    extractor: &Extractor,
    tally: &mut ExtractionTally,
    request: &BatchRequest,
    progress: &mut dyn FnMut(BatchProgress),
) -> Result<BatchReport, BatchError> {
    validate_request(request)?;

    let total = request.archive_names.len();
    let mut batch = ExtractionTally::new();
    let mut outcomes = Vec::with_capacity(total);

    info!(
        archives = total,
        destination = %request.destination_dir.display(),
        "starting batch"
    );
    progress(BatchProgress {
        processed: 0,
        total,
    });

    for (index, archive_name) in request.archive_names.iter().enumerate() {
        let result = extractor.try_extract(archive_name, &request.destination_dir);

        if let Err(e) = &result {
            warn!(archive = %archive_name, error = %e, "extraction failed");
        }

        let succeeded = result.is_ok();
        batch.record(succeeded);
        tally.record(succeeded);

        outcomes.push(ArchiveOutcome {
            archive_name: archive_name.clone(),
            result,
        });

        progress(BatchProgress {
            processed: index + 1,
            total,
        });
    }

    info!(
        succeeded = batch.success_count,
        failed = batch.failure_count,
        session_succeeded = tally.success_count,
        session_failed = tally.failure_count,
        "batch finished"
    );

    Ok(BatchReport {
        batch,
        session: *tally,
        outcomes,
    })
}
