use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::warn;

use crate::ui::settings::UiSettings;

fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("story_studio");
    path.push("ui_settings.json");
    path
}

pub fn load_settings() -> UiSettings {
    load_from(&settings_path())
}

pub fn save_settings(settings: &UiSettings) -> anyhow::Result<()> {
    save_to(&settings_path(), settings)
}

pub fn load_from(path: &Path) -> UiSettings {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return UiSettings::default(),
    };

    match serde_json::from_str::<UiSettings>(&raw) {
        Ok(settings) => settings.clamped(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable UI settings");
            UiSettings::default()
        }
    }
}

pub fn save_to(path: &Path, settings: &UiSettings) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}
