//! Color palette for the control panel

use eframe::egui::Color32;

pub const BG_PRIMARY: Color32 = Color32::from_rgb(20, 22, 27);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(28, 31, 38);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(225, 228, 235);
pub const TEXT_DIM: Color32 = Color32::from_rgb(170, 175, 185);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(110, 115, 128);

pub const ACCENT_GREEN: Color32 = Color32::from_rgb(80, 220, 130);
pub const ACCENT_RED: Color32 = Color32::from_rgb(240, 90, 90);
