//! Settings file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::HudSettings;

/// Get the settings directory path (~/.mtlhud/)
pub fn settings_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".mtlhud")
}

/// Get the settings file path (~/.mtlhud/settings.toml)
pub fn settings_path() -> PathBuf {
    settings_dir().join("settings.toml")
}

/// Load settings from a file.
pub fn load_from_file(path: &Path) -> Result<HudSettings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

    let settings: HudSettings = toml::from_str(&content)
        .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;

    Ok(settings)
}

/// Save settings to a file with atomic write and file locking.
///
/// This ensures:
/// 1. Exclusive lock prevents concurrent writes from CLI and GUI
/// 2. Atomic write (temp file + rename) prevents corruption on crash
/// 3. Parent directory is created if needed
pub fn save_to_file(settings: &HudSettings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create settings directory: {}", parent.display())
        })?;
    }

    let content =
        toml::to_string_pretty(settings).with_context(|| "Failed to serialize settings")?;

    // Create lock file (separate from settings to avoid issues with rename)
    let lock_path = path.with_extension("toml.lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)
        .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

    // Acquire exclusive lock (blocks until available)
    lock_file
        .lock_exclusive()
        .with_context(|| "Failed to acquire settings lock")?;

    // Write to temp file first (atomic write pattern)
    let temp_path = path.with_extension("toml.tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .with_context(|| "Failed to write settings content")?;

    temp_file
        .sync_all()
        .with_context(|| "Failed to sync settings file")?;

    // Atomic rename (overwrites existing file)
    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename settings file: {}", path.display()))?;

    // Lock is automatically released when lock_file is dropped
    Ok(())
}
