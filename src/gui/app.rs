//! eframe::App implementation for the HUD control panel

use eframe::egui;

use crate::hud::HudController;
use crate::settings::SettingsStore;

use super::panel;
use super::theme::BG_PRIMARY;

pub struct HudApp {
    store: SettingsStore,
    controller: HudController,
}

impl HudApp {
    pub fn new(store: SettingsStore, controller: HudController) -> Self {
        Self { store, controller }
    }
}

impl eframe::App for HudApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(BG_PRIMARY)
                    .inner_margin(14.0),
            )
            .show(ctx, |ui| {
                panel::render_panel(ui, &mut self.store, &self.controller);
            });
    }
}
