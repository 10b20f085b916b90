//! Process-lifetime extraction session.

use crate::batch::run_batch;
use crate::error::BatchError;
use crate::extract::Extractor;
use crate::types::{BatchProgress, BatchReport, BatchRequest, ExtractionTally};

/// One application run: an extractor plus the counters shared by every batch.
///
/// The tally starts at zero and is never reset, so the counts reported after
/// a batch include every earlier batch in the session.
#[derive(Debug, Default)]
pub struct Session {
    extractor: Extractor,
    tally: ExtractionTally,
}

impl Session {
    /// Session reading archives from the user's downloads directory.
    pub fn new() -> Self {
        Self::with_extractor(Extractor::from_downloads())
    }

    pub fn with_extractor(extractor: Extractor) -> Self {
        Self {
            extractor,
            tally: ExtractionTally::new(),
        }
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Cumulative counts for every batch run so far.
    pub fn tally(&self) -> ExtractionTally {
        self.tally
    }

    /// Run one batch, adding its results to the session tally.
    pub fn run_batch(
        &mut self,
        request: &BatchRequest,
        progress: &mut dyn FnMut(BatchProgress),
    ) -> Result<BatchReport, BatchError> {
        run_batch(&self.extractor, &mut self.tally, request, progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::downloads_dir;

    #[test]
    fn test_new_session_reads_from_downloads() {
        let session = Session::new();
        if let Some(dir) = downloads_dir() {
            assert_eq!(session.extractor().source_dir(), dir.as_path());
        }
        assert_eq!(session.tally(), ExtractionTally::default());
    }
}
