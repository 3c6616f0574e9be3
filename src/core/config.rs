use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

use super::key_store::{DEFAULT_KEY_NAME, DEFAULT_KEY_STORE_PATH};

pub const DEFAULT_FIXER_BASE_URL: &str = "http://data.fixer.io/api/";

fn default_base_url() -> String {
    DEFAULT_FIXER_BASE_URL.to_string()
}

fn default_key_store() -> PathBuf {
    PathBuf::from(DEFAULT_KEY_STORE_PATH)
}

fn default_key_name() -> String {
    DEFAULT_KEY_NAME.to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FixerProviderConfig {
    /// Prefix of every request; expected to end with `/`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_key_store")]
    pub key_store: PathBuf,
    #[serde(default = "default_key_name")]
    pub key_name: String,
}

impl Default for FixerProviderConfig {
    fn default() -> Self {
        FixerProviderConfig {
            base_url: default_base_url(),
            key_store: default_key_store(),
            key_name: default_key_name(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub fixer: FixerProviderConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
}

impl AppConfig {
    /// Loads the config from the default location, or the defaults when no
    /// config file has been set up.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "xrate", "xrate")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
