//! UI helper functions for panel rendering

use eframe::egui::{self, RichText};

use super::theme::{BG_SECONDARY, TEXT_DIM, TEXT_MUTED};

/// Render a toggle row with a muted description.
///
/// Returns true when the user changed the value this frame.
pub fn toggle_row(ui: &mut egui::Ui, value: &mut bool, label: &str, description: &str) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        changed = ui.checkbox(value, "").changed();
        ui.label(RichText::new(label).color(TEXT_DIM));
        if !description.is_empty() {
            ui.label(RichText::new(description).small().color(TEXT_MUTED));
        }
    });
    changed
}

/// Render a section frame with secondary background
pub fn section_frame<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::NONE
        .fill(BG_SECONDARY)
        .corner_radius(4.0)
        .inner_margin(10.0)
        .show(ui, add_contents)
        .inner
}
