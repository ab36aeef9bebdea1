//! GUI runner - launches the HUD control panel

use anyhow::Result;
use eframe::egui;

use super::app::HudApp;
use crate::hud::{HudController, Launchctl};
use crate::login::LaunchAgent;
use crate::settings::SettingsStore;

/// Run the control panel application.
///
/// When the app was started by the login path and the user opted into
/// boot-time enablement, the stored settings are re-applied once before
/// the event loop starts.
pub fn run_gui() -> Result<()> {
    let mut store = SettingsStore::load(Box::new(LaunchAgent));
    let controller = HudController::new(Box::new(Launchctl));

    controller.apply_on_boot_if_needed(&mut store);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([340.0, 600.0])
            .with_min_inner_size([320.0, 480.0])
            .with_resizable(false),
        centered: true,
        ..Default::default()
    };

    let app = HudApp::new(store, controller);

    eframe::run_native("mtlhud", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
