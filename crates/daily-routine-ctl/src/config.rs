use anyhow::{Context, Result};
use daily_routine_common::config::GeneralConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const APP_DIR: &str = "daily-routine";

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CtlConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("/tmp")).join(APP_DIR);

        Self { path: data_dir.join("activities.db").to_string_lossy().to_string() }
    }
}

impl From<&DatabaseConfig> for daily_routine_db::DatabaseConfig {
    fn from(config: &DatabaseConfig) -> Self {
        Self { path: config.path.clone() }
    }
}

impl CtlConfig {
    /// Default configuration file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join(APP_DIR)
            .join("config.toml")
    }

    /// Load configuration from a specific path, writing the defaults there
    /// first if the file does not exist yet
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        debug!("Loading configuration from {:?}", config_path);

        if !config_path.exists() {
            info!(
                "Configuration file not found at {:?}, creating default configuration",
                config_path
            );
            let default_config = Self::default();
            default_config.save_to_path(config_path)?;
            return Ok(default_config);
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: CtlConfig = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        debug!("Loaded configuration from {:?}", config_path);
        Ok(config)
    }

    pub fn save_to_path(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let config_content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration to TOML")?;

        fs::write(config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Saved configuration to {:?}", config_path);
        Ok(())
    }
}
