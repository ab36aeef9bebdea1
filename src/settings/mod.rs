//! HUD settings model and write-through store
//!
//! The store owns the current option values and mirrors every persisted
//! field back to the settings file as a direct side effect of its setters.
//! Persistence failures are logged and swallowed; the HUD controls must
//! keep working even when the settings file is not writable.

mod io;

pub use io::{settings_dir, settings_path};

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::login::LoginItem;

/// Persisted HUD settings
///
/// On-disk keys match the historical names consumed by earlier releases,
/// so existing settings files keep loading unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HudSettings {
    /// Whether the Metal HUD overlay should be active
    #[serde(rename = "hudEnabled", default)]
    pub enabled: bool,

    /// Which overlay metrics to show (keys from the element catalog)
    #[serde(rename = "selectedElements", default)]
    pub selected_elements: BTreeSet<String>,

    /// Overlay scale factor, 0.05..=1.0
    #[serde(default = "default_scale")]
    pub scale: f64,

    /// Overlay opacity, 0.1..=1.0
    #[serde(default = "default_opacity")]
    pub opacity: f64,

    /// Screen position key (see `hud::alignment`)
    #[serde(default = "default_alignment")]
    pub alignment: String,

    /// Re-apply the HUD automatically when the app starts at login
    #[serde(rename = "enableHUDOnBoot", default)]
    pub enable_on_boot: bool,

    /// Mirrors the OS login-item registration state; never persisted
    #[serde(skip)]
    pub launch_at_login: bool,

    /// Last human-readable apply/disable outcome; never persisted
    #[serde(skip)]
    pub status_message: String,
}

fn default_scale() -> f64 {
    0.20
}

fn default_opacity() -> f64 {
    1.00
}

fn default_alignment() -> String {
    "topRight".to_string()
}

impl Default for HudSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            selected_elements: BTreeSet::new(),
            scale: default_scale(),
            opacity: default_opacity(),
            alignment: default_alignment(),
            enable_on_boot: false,
            launch_at_login: false,
            status_message: String::new(),
        }
    }
}

/// Write-through settings store
///
/// Constructed once at application startup and injected into whatever
/// reads or mutates the settings. Range constraints on `scale` and
/// `opacity` are enforced by the UI sliders, not here.
pub struct SettingsStore {
    path: PathBuf,
    login: Box<dyn LoginItem>,
    settings: HudSettings,
}

impl SettingsStore {
    /// Load settings from the default per-user location
    pub fn load(login: Box<dyn LoginItem>) -> Self {
        Self::load_from(io::settings_path(), login)
    }

    /// Load settings from an explicit path
    ///
    /// A missing file yields the documented defaults; an unreadable or
    /// corrupt file does too, with a logged warning. `launch_at_login`
    /// always reflects the current OS registration state rather than
    /// anything on disk.
    pub fn load_from(path: PathBuf, login: Box<dyn LoginItem>) -> Self {
        let mut settings = if path.exists() {
            match io::load_from_file(&path) {
                Ok(s) => s,
                Err(e) => {
                    warn!(
                        "Failed to load settings ({}): {}. Falling back to defaults.",
                        path.display(),
                        e
                    );
                    HudSettings::default()
                }
            }
        } else {
            HudSettings::default()
        };

        settings.launch_at_login = login.is_registered();

        Self {
            path,
            login,
            settings,
        }
    }

    pub fn settings(&self) -> &HudSettings {
        &self.settings
    }

    pub fn set_enabled(&mut self, value: bool) {
        self.settings.enabled = value;
        self.save();
    }

    pub fn set_selected_elements(&mut self, elements: BTreeSet<String>) {
        self.settings.selected_elements = elements;
        self.save();
    }

    /// Toggle a single element key in or out of the selection
    pub fn set_element_selected(&mut self, key: &str, selected: bool) {
        let changed = if selected {
            self.settings.selected_elements.insert(key.to_string())
        } else {
            self.settings.selected_elements.remove(key)
        };
        if changed {
            self.save();
        }
    }

    pub fn set_scale(&mut self, value: f64) {
        self.settings.scale = value;
        self.save();
    }

    pub fn set_opacity(&mut self, value: f64) {
        self.settings.opacity = value;
        self.save();
    }

    pub fn set_alignment(&mut self, key: &str) {
        self.settings.alignment = key.to_string();
        self.save();
    }

    pub fn set_enable_on_boot(&mut self, value: bool) {
        self.settings.enable_on_boot = value;
        self.save();
    }

    /// Set the login-item state, registering or unregistering with the OS.
    ///
    /// Turning this off also turns off `enable_on_boot`: without a login
    /// item there is no boot path that could honor it. Registration
    /// failures are the login item's problem and never propagate here.
    pub fn set_launch_at_login(&mut self, value: bool) {
        self.settings.launch_at_login = value;
        if value {
            self.login.register();
        } else {
            self.login.unregister();
            self.settings.enable_on_boot = false;
        }
        self.save();
    }

    /// Update the transient status line (not persisted)
    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.settings.status_message = message.into();
    }

    fn save(&self) {
        if let Err(e) = io::save_to_file(&self.settings, &self.path) {
            warn!(
                "Failed to save settings ({}): {}",
                self.path.display(),
                e
            );
        }
    }
}
