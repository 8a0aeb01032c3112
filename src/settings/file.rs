//! Settings file persistence.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::Settings;

/// `<config dir>/passgen/settings.json`, falling back to `$HOME/.config`.
pub fn path() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("passgen")
        .join("settings.json")
}

/// Missing file means defaults; unreadable or malformed file is an error.
pub fn load(path: &Path) -> Result<Settings> {
    if !path.exists() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("reading settings from {}", path.display()))?;
    let settings = serde_json::from_str(&data)
        .with_context(|| format!("parsing settings in {}", path.display()))?;
    debug!(path = %path.display(), "settings loaded");
    Ok(settings)
}

pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating settings directory {}", parent.display()))?;
    }

    let mut data = serde_json::to_string_pretty(settings).context("encoding settings")?;
    data.push('\n');
    fs::write(path, data).with_context(|| format!("writing settings to {}", path.display()))?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}
