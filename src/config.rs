//! Viewer settings
//!
//! A small TOML file under the platform config directory. Only startup
//! concerns live here (window size, log level, where assets and content come
//! from); UI state such as the language is never persisted.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::{config, defaults};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_window_width")]
    pub window_width: u16,
    #[serde(default = "default_window_height")]
    pub window_height: u16,
    /// Directory relative asset paths are resolved against
    #[serde(default = "default_asset_root")]
    pub asset_root: PathBuf,
    /// Content document to use instead of the bundled one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_path: Option<PathBuf>,
}

fn default_log_level() -> String {
    defaults::LOG_LEVEL.to_string()
}

fn default_window_width() -> u16 {
    defaults::WINDOW_WIDTH
}

fn default_window_height() -> u16 {
    defaults::WINDOW_HEIGHT
}

fn default_asset_root() -> PathBuf {
    PathBuf::from(defaults::ASSET_ROOT)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            asset_root: default_asset_root(),
            content_path: None,
        }
    }
}

impl Settings {
    pub fn path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(config::APP_DIR);
        path.push(config::FILENAME);
        path
    }

    /// Load from the default location, writing defaults on first run
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Config file not found, creating default config at {:?}", path);
            let settings = Settings::default();
            settings.save_to(path)?;
            return Ok(settings);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse TOML from {:?}", path))?;

        info!("Loaded config from {:?}", path);
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let toml_string =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(path, toml_string)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_creates_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let settings = Settings {
            log_level: "debug".to_string(),
            window_width: 1024,
            window_height: 700,
            asset_root: PathBuf::from("/srv/folio"),
            content_path: Some(PathBuf::from("/srv/folio/content.json")),
        };
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "window_width = 900\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.window_width, 900);
        assert_eq!(settings.window_height, defaults::WINDOW_HEIGHT);
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.asset_root, PathBuf::from("assets"));
        assert_eq!(settings.content_path, None);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "window_width = \"wide\"\n").unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse TOML"));
    }
}
