// src/config/settings.rs
use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::state::Panel;

pub const APP_DIR_NAME: &str = "dbops-dashboard";
pub const SETTINGS_FILE_NAME: &str = "settings.ron";
pub const ENV_PREFIX: &str = "DBOPS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("no configuration directory available on this platform")]
    NoConfigDir,
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 860.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSettings {
    pub window: WindowSettings,
    pub initial_panel: Panel,
    pub log_filter: String,
    pub remember_panel: bool,  // restore the last panel from eframe storage
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            initial_panel: Panel::Replication,
            log_filter: "info".to_string(),
            remember_panel: true,
        }
    }
}

impl DashboardSettings {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    /// Loads from the platform config directory, then `DBOPS_*` environment variables.
    pub fn load() -> Result<Self, SettingsError> {
        let path = Self::default_path().ok_or(SettingsError::NoConfigDir)?;
        Self::load_from(&path, Self::environment())
    }

    /// Layers defaults, the RON file at `path` (optional) and `env`, in that order.
    pub fn load_from(path: &Path, env: Environment) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(Config::try_from(&DashboardSettings::default())?)
            .add_source(File::from(path).format(FileFormat::Ron).required(false))
            .add_source(env)
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }
}
