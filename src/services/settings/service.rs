use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.toml";

/// Loads and saves [`Settings`] as a TOML file
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file under the platform config directory
    pub fn default_location() -> Self {
        let path = if let Some(dirs) = ProjectDirs::from("com", "RustGantt", "GanttChart") {
            dirs.config_dir().join(SETTINGS_FILE)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            PathBuf::from(SETTINGS_FILE)
        };
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings, falling back to defaults when no file exists
    pub fn get(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::info!("No settings at {:?}; using defaults", self.path);
            return Ok(Settings::default());
        }

        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {:?}", self.path))?;
        let settings: Settings = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse settings in {:?}", self.path))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create {:?}", dir))?;
            }
        }

        let raw = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write settings to {:?}", self.path))?;

        log::info!("Saved settings to {:?}", self.path);
        Ok(())
    }
}
