//! Server configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

fn default_port() -> u16 {
    3000
}

fn default_sample_data() -> bool {
    true
}

/// Configuration at ~/.config/chantier/config.toml
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Seed the store with the built-in demo projects on startup.
    #[serde(default = "default_sample_data")]
    pub sample_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: default_port(),
            sample_data: default_sample_data(),
        }
    }
}

impl ServerConfig {
    pub fn config_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join("chantier").join("config.toml"))
    }

    /// Load the config, falling back to defaults when the file is absent.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config =
            toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;

        Ok(config)
    }
}
