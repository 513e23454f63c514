// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! The zoom widget itself has no options; only the demo gallery is configurable.
//!
//! # Examples
//!
//! ```no_run
//! use pinch_lens::config::{self, Config};
//! use std::path::PathBuf;
//!
//! let mut config = config::load().unwrap_or_default();
//! config.thumbnail_height = Some(180.0);
//! config::save(&config).expect("Failed to save config");
//!
//! let temp_file = PathBuf::from("./temp_config_dir/test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.thumbnail_height, Some(180.0));
//! std::fs::remove_dir_all("./temp_config_dir").unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PinchLens";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory opened when no path is given on the command line.
    #[serde(default)]
    pub last_directory: Option<PathBuf>,
    #[serde(default)]
    pub thumbnail_height: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            last_directory: None,
            thumbnail_height: Some(DEFAULT_THUMBNAIL_HEIGHT),
        }
    }
}

impl Config {
    /// Thumbnail height clamped to the supported range.
    #[must_use]
    pub fn thumbnail_height(&self) -> f32 {
        self.thumbnail_height
            .unwrap_or(DEFAULT_THUMBNAIL_HEIGHT)
            .clamp(MIN_THUMBNAIL_HEIGHT, MAX_THUMBNAIL_HEIGHT)
    }
}

/// `<config_dir>/PinchLens/settings.toml`, if the platform has a config dir.
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = default_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = default_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads the config at `path`. Unparseable content falls back to defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid settings, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
