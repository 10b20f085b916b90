use parking_lot::Mutex;
use zip_extractor::Session;

/// Application state shared by the command handlers.
///
/// Holds the one extraction session of this process, so counts accumulate
/// across every batch the user runs until the window is closed.
pub struct AppState {
    pub session: Mutex<Session>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_session(Session::new())
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
