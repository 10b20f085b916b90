pub mod commands;
pub mod dialog;
pub mod shortcut;
pub mod state;
pub mod ui;

use eframe::egui;
use state::AppState;
use ui::ZipExtractorApp;

/// Open the main window and block until it is closed.
pub fn run() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("ZIP Extractor")
            .with_inner_size([500.0, 250.0])
            .with_min_inner_size([400.0, 200.0]),
        ..Default::default()
    };

    eframe::run_native(
        "ZIP Extractor",
        options,
        Box::new(|_cc| Ok(Box::new(ZipExtractorApp::new(AppState::new())))),
    )
}
