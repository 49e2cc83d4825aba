//! Settings storage
//!
//! Preferences for the workstation shell: theme and the sample counts shown on
//! the saved view badges. The selected view itself is never written to disk.

use crate::storage::{get_data_dir, StorageError};
use crate::types::view::ViewCounts;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Workstation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkstationSettings {
    /// UI theme: "dark" or "light"
    pub theme: String,
    /// Badge counts keyed by view name
    pub view_counts: ViewCounts,
}

impl Default for WorkstationSettings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            view_counts: ViewCounts::new(),
        }
    }
}

impl WorkstationSettings {
    /// Validate settings values
    pub fn validate(&mut self) {
        if self.theme != "dark" && self.theme != "light" {
            self.theme = "dark".to_string();
        }
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("workstation.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> WorkstationSettings {
    match get_settings_path().and_then(|path| load_settings_from(&path)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            WorkstationSettings::default()
        }
    }
}

/// Load settings from a specific file, propagating read and parse errors
pub fn load_settings_from(path: &Path) -> Result<WorkstationSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(WorkstationSettings::default());
    }

    let json = fs::read_to_string(path)?;
    let mut settings: WorkstationSettings = serde_json::from_str(&json)?;
    settings.validate();

    tracing::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings(settings: &WorkstationSettings) -> Result<(), StorageError> {
    save_settings_to(&get_settings_path()?, settings)
}

/// Save settings to a specific file, creating parent directories
pub fn save_settings_to(path: &Path, settings: &WorkstationSettings) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to {}", path.display());
    Ok(())
}
