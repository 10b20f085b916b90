//! Modal message boxes.

use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Show an informational message and wait for the user to dismiss it.
pub fn show_info(text: &str) {
    show(MessageLevel::Info, "Results", text);
}

/// Show an error message and wait for the user to dismiss it.
pub fn show_error(text: &str) {
    show(MessageLevel::Error, "Error", text);
}

fn show(level: MessageLevel, title: &str, text: &str) {
    MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(text)
        .set_buttons(MessageButtons::Ok)
        .show();
}
