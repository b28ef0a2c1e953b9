//! Settings file persistence.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use safepass::LengthPolicy;

use super::{Settings, SettingsError};

const APP_DIR: &str = "safepass";
const FILE_NAME: &str = "settings.json";

pub fn path() -> Result<PathBuf, SettingsError> {
    let base = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
    Ok(base.join(APP_DIR).join(FILE_NAME))
}

pub fn save(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut data = serde_json::to_string_pretty(settings)?;
    data.push('\n');
    fs::write(path, data)?;

    info!("saved settings to {}", path.display());
    Ok(())
}

/// A missing file yields defaults. Out-of-policy lengths are reset.
pub fn load(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let data = fs::read_to_string(path)?;
    let mut settings: Settings = serde_json::from_str(&data)?;

    if LengthPolicy::default().check(settings.length).is_err() {
        warn!(
            "saved length {} is out of range, using {}",
            settings.length,
            LengthPolicy::DEFAULT_LENGTH
        );
        settings.length = LengthPolicy::DEFAULT_LENGTH;
    }
    settings.count = settings.count.max(1);

    info!("loaded settings from {}", path.display());
    Ok(settings)
}
