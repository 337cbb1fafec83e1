//! Config - Persisted Font Metrics Settings

use crate::domain::SizeCategory;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info};

const CONFIG_FILE: &str = "font-metrics.toml";

/// How scaled sizes are computed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalingMode {
    /// Use the platform's native curve when it has one
    #[default]
    Auto,
    /// Always use the linear body-size ratio
    Linear,
}

/// Settings for the built-in platform and the scaler
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Preferred category reported by the built-in platform
    pub size_category: Option<SizeCategory>,
    /// Scaling policy
    pub scaling: ScalingMode,
}

/// Path of the config file inside the project config directory
pub fn config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(CONFIG_FILE))
}

impl MetricsConfig {
    /// Load from the default location; a missing or empty file yields defaults
    pub fn try_load() -> Result<Self> {
        Self::load_from(&config_path()?)
    }

    /// Load from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(path)?;
        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;
        Ok(config)
    }

    /// Save to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path()?)
    }

    /// Save to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        info!(path = ?path, "Config saved");
        Ok(())
    }
}
