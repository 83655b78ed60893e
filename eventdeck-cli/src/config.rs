use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

static DEFAULT_STORE_URL: &str = "http://localhost:3000";

fn default_store_url() -> String {
    DEFAULT_STORE_URL.to_string()
}

/// Global configuration at ~/.config/eventdeck/config.toml
///
/// The store URL is the only setting; `--store-url` on the command line
/// overrides it for a single invocation.
#[derive(Deserialize, Clone)]
pub struct GlobalConfig {
    #[serde(default = "default_store_url")]
    pub store_url: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            store_url: default_store_url(),
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("eventdeck");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it is absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }
}
