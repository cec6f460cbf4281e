//! Settings persistence and path resolution.
//!
//! Covers:
//! - `load` / `save` (YAML file I/O with atomic write)
//! - `load_from` / `save_to` for explicit paths
//! - XDG-style path helpers (`settings_path`, `settings_dir`)

use crate::error::ConfigError;
use crate::settings::Settings;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

impl Settings {
    /// Load settings from the default path, seeding the file with defaults
    /// when it does not exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::settings_path())
    }

    /// Load settings from `path`, creating it with defaults if missing.
    ///
    /// Values already present in the file are kept; missing keys take their
    /// defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Settings path: {:?}", path);

        if path.exists() {
            let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let settings: Settings =
                serde_yaml_ng::from_str(&contents).map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?;
            log::debug!("Loaded settings: {:?}", settings);
            Ok(settings)
        } else {
            log::info!("Settings file not found, creating default at {:?}", path);
            let settings = Self::default();
            if let Err(e) = settings.save_to(path) {
                log::error!("Failed to save default settings: {}", e);
                return Err(e);
            }
            Ok(settings)
        }
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::settings_path())
    }

    /// Save settings to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::from)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(io_err)?;
        fs::rename(&temp_path, path).map_err(io_err)?;

        Ok(())
    }

    /// Get the settings file path (using XDG convention)
    pub fn settings_path() -> PathBuf {
        Self::settings_dir().join("settings.yaml")
    }

    /// Get the settings directory path (using XDG convention)
    pub fn settings_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("tab-shuttle")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("tab-shuttle")
            } else {
                PathBuf::from(".")
            }
        }
    }
}
