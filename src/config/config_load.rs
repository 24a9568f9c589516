// src/config/config_load.rs
//
// loading config.toml

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

use super::{FieldConfig, WindowConfig};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub field: FieldConfig,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_working_dir()
    }

    // A missing or broken config degrades to defaults; the window still
    // opens with a flat-colored field.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("could not load config.toml ({e}), using defaults");
            Self::default()
        })
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).ok()?;
            toml::from_str(&content).ok()
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(Self::working_dir_path())?;
        Ok(toml::from_str(&content)?)
    }

    fn working_dir_path() -> PathBuf {
        PathBuf::from("config.toml")
    }
}
