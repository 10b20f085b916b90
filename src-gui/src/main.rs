// Prevents additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use tracing::{info, warn};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match zip_extractor_app::shortcut::create_app_shortcut() {
        Ok(path) => info!(shortcut = %path.display(), "created desktop shortcut"),
        Err(e) => warn!(error = %e, "could not create desktop shortcut"),
    }

    zip_extractor_app::run()
}
