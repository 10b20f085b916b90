//! The main window.

use crate::commands;
use crate::dialog;
use crate::state::AppState;
use eframe::egui;
use std::path::PathBuf;
use zip_extractor::{join_archive_list, BatchProgress};

const LABEL_WIDTH: f32 = 130.0;
const BUTTON_WIDTH: f32 = 70.0;

pub struct ZipExtractorApp {
    state: AppState,
    source_dir: PathBuf,
    archives_text: String,
    destination_text: String,
    progress: BatchProgress,
}

impl ZipExtractorApp {
    pub fn new(state: AppState) -> Self {
        let source_dir = state.session.lock().extractor().source_dir().to_path_buf();
        Self {
            state,
            source_dir,
            archives_text: String::new(),
            destination_text: String::new(),
            progress: BatchProgress {
                processed: 0,
                total: 1,
            },
        }
    }

    fn browse_archives(&mut self) {
        if let Some(names) = commands::pick_archives(&self.source_dir) {
            self.archives_text = join_archive_list(&names);
        }
    }

    fn browse_destination(&mut self) {
        if let Some(dir) = commands::pick_destination() {
            self.destination_text = dir.to_string_lossy().to_string();
        }
    }

    /// Runs the whole batch before returning; the window does not repaint
    /// until it finishes.
    fn extract(&mut self) {
        let progress = &mut self.progress;
        let result = commands::extract_selected(
            &self.state,
            &self.archives_text,
            &self.destination_text,
            &mut |p| *progress = p,
        );

        match result {
            Ok(report) => dialog::show_info(&report.session.to_string()),
            Err(message) => dialog::show_error(&message),
        }
    }

    fn progress_fraction(&self) -> f32 {
        if self.progress.total == 0 {
            0.0
        } else {
            self.progress.processed as f32 / self.progress.total as f32
        }
    }
}

impl eframe::App for ZipExtractorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.add_sized([LABEL_WIDTH, 20.0], egui::Label::new("ZIP files:"));
                let width = ui.available_width() - BUTTON_WIDTH;
                ui.add(
                    egui::TextEdit::singleline(&mut self.archives_text)
                        .hint_text("Select ZIP files")
                        .desired_width(width),
                );
                if ui.button("Browse").clicked() {
                    self.browse_archives();
                }
            });

            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.add_sized([LABEL_WIDTH, 20.0], egui::Label::new("Extract to folder:"));
                let width = ui.available_width() - BUTTON_WIDTH;
                ui.add(
                    egui::TextEdit::singleline(&mut self.destination_text)
                        .hint_text("Select a folder")
                        .desired_width(width),
                );
                if ui.button("Browse").clicked() {
                    self.browse_destination();
                }
            });

            ui.add_space(16.0);

            ui.add(
                egui::ProgressBar::new(self.progress_fraction())
                    .text(format!("{}/{}", self.progress.processed, self.progress.total)),
            );

            ui.add_space(16.0);

            ui.vertical_centered_justified(|ui| {
                if ui.button("Extract").clicked() {
                    self.extract();
                }
            });
        });
    }
}
