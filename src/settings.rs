use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};
use crate::labels::Locale;
use crate::ledger::DEFAULT_BASELINE;
use crate::view::{ViewMode, ViewState};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default = "default_baseline")]
    pub baseline: i64,
    #[serde(default)]
    pub view: ViewMode,
    #[serde(default = "default_newest_first")]
    pub newest_first: bool,
}

fn default_data_file() -> String {
    "data.json".to_string()
}

fn default_baseline() -> i64 {
    DEFAULT_BASELINE
}

fn default_newest_first() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            locale: Locale::default(),
            baseline: default_baseline(),
            view: ViewMode::default(),
            newest_first: default_newest_first(),
        }
    }
}

impl Settings {
    /// Toggle values a fresh session starts with.
    pub fn view_defaults(&self) -> ViewState {
        ViewState {
            view_mode: self.view,
            sort_descending: self.newest_first,
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("piggy")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    load_settings_from(&config_dir())
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    save_settings_to(&config_dir(), settings)
}

/// Read `settings.json` from `dir`. A missing file means defaults; an
/// unreadable one is logged and also falls back to defaults.
fn load_settings_from(dir: &Path) -> Settings {
    let path = dir.join("settings.json");
    if !path.exists() {
        return Settings::default();
    }
    let parsed = std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|content| serde_json::from_str(&content).map_err(|e| e.to_string()));
    parsed.unwrap_or_else(|e| {
        log::warn!("ignoring unreadable {}: {e}", path.display());
        Settings::default()
    })
}

fn save_settings_to(dir: &Path, settings: &Settings) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| LedgerError::Settings(e.to_string()))?;
    std::fs::write(dir.join("settings.json"), format!("{json}\n"))?;
    Ok(())
}

pub fn shellexpand_path(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| PathBuf::from(path))
        .to_string_lossy()
        .to_string()
}
