//! Control panel layout
//!
//! Pure presentation glue: widgets read the store's current values and
//! push changes back through its setters. Apply/Disable go through the
//! controller; nothing here carries logic of its own.

use std::collections::BTreeSet;

use eframe::egui::{self, RichText};

use crate::hud::{HudController, ALIGNMENTS, ELEMENTS, PRESETS};
use crate::settings::SettingsStore;

use super::helpers::{section_frame, toggle_row};
use super::theme::{ACCENT_GREEN, ACCENT_RED, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};

pub fn render_panel(ui: &mut egui::Ui, store: &mut SettingsStore, controller: &HudController) {
    render_enable_toggle(ui, store);
    ui.separator();

    render_presets(ui, store);
    ui.add_space(6.0);

    render_elements(ui, store);
    ui.add_space(6.0);

    render_sliders(ui, store);
    ui.separator();

    render_login(ui, store);
    ui.separator();

    render_actions(ui, store, controller);
    render_status(ui, store);
}

fn render_enable_toggle(ui: &mut egui::Ui, store: &mut SettingsStore) {
    let mut enabled = store.settings().enabled;
    if toggle_row(ui, &mut enabled, "Enable Metal HUD", "") {
        store.set_enabled(enabled);
    }
}

fn render_presets(ui: &mut egui::Ui, store: &mut SettingsStore) {
    ui.label(RichText::new("Presets").color(TEXT_PRIMARY));
    section_frame(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for preset in PRESETS {
                if ui.small_button(preset.name).clicked() {
                    let elements: BTreeSet<String> =
                        preset.elements.iter().map(|k| k.to_string()).collect();
                    store.set_selected_elements(elements);
                }
            }
        });
    });
}

fn render_elements(ui: &mut egui::Ui, store: &mut SettingsStore) {
    ui.label(RichText::new("Elements").color(TEXT_PRIMARY));
    section_frame(ui, |ui| {
        egui::ScrollArea::vertical()
            .max_height(180.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for element in ELEMENTS {
                    let mut selected = store.settings().selected_elements.contains(element.key);
                    if ui.checkbox(&mut selected, element.label).changed() {
                        store.set_element_selected(element.key, selected);
                    }
                }
            });
    });
}

fn render_sliders(ui: &mut egui::Ui, store: &mut SettingsStore) {
    let mut scale = store.settings().scale;
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("Scale: {scale:.2}")).color(TEXT_DIM));
        if ui
            .add(egui::Slider::new(&mut scale, 0.05..=1.0).show_value(false))
            .changed()
        {
            store.set_scale(scale);
        }
    });

    let mut opacity = store.settings().opacity;
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("Opacity: {}%", (opacity * 100.0).round() as i32)).color(TEXT_DIM));
        if ui
            .add(egui::Slider::new(&mut opacity, 0.1..=1.0).show_value(false))
            .changed()
        {
            store.set_opacity(opacity);
        }
    });

    ui.horizontal(|ui| {
        ui.label(RichText::new("Location:").color(TEXT_DIM));
        let current = store.settings().alignment.clone();
        let current_name = ALIGNMENTS
            .iter()
            .find(|(_, key)| *key == current)
            .map(|(name, _)| *name)
            .unwrap_or("Top Right");
        egui::ComboBox::from_id_salt("hud_alignment")
            .selected_text(current_name)
            .show_ui(ui, |ui| {
                for (name, key) in ALIGNMENTS {
                    if ui.selectable_label(current == *key, *name).clicked() {
                        store.set_alignment(key);
                    }
                }
            });
    });
}

fn render_login(ui: &mut egui::Ui, store: &mut SettingsStore) {
    let mut launch_at_login = store.settings().launch_at_login;
    if toggle_row(ui, &mut launch_at_login, "Open at Login", "") {
        store.set_launch_at_login(launch_at_login);
    }

    let login_enabled = store.settings().launch_at_login;
    ui.add_enabled_ui(login_enabled, |ui| {
        let mut enable_on_boot = store.settings().enable_on_boot;
        if toggle_row(
            ui,
            &mut enable_on_boot,
            "Enable HUD on Boot",
            "(re-applies at login)",
        ) {
            store.set_enable_on_boot(enable_on_boot);
        }
    });
}

fn render_actions(ui: &mut egui::Ui, store: &mut SettingsStore, controller: &HudController) {
    ui.horizontal(|ui| {
        if ui
            .button(RichText::new("Apply").color(ACCENT_GREEN))
            .clicked()
        {
            controller.apply(store);
        }

        if ui
            .button(RichText::new("Disable HUD").color(ACCENT_RED))
            .clicked()
        {
            controller.disable(store);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    });
}

fn render_status(ui: &mut egui::Ui, store: &SettingsStore) {
    let message = &store.settings().status_message;
    if !message.is_empty() {
        ui.add_space(4.0);
        ui.label(RichText::new(message).small().color(TEXT_MUTED));
    }
}
