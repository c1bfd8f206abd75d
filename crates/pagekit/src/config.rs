// File: src/config.rs
// Purpose: Configuration parsing from pagekit.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub pages: PagesConfig,
}

/// Page resolution configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagesConfig {
    /// Directory containing page files (default: "pages")
    #[serde(default = "default_pages_dir")]
    pub pages_dir: String,

    /// Ordered location templates probed during view resolution.
    /// `{0}` is the view name, `{1}` the page directory.
    #[serde(default = "default_locations")]
    pub locations: Vec<String>,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            pages_dir: default_pages_dir(),
            locations: default_locations(),
        }
    }
}

fn default_pages_dir() -> String {
    "pages".to_string()
}

fn default_locations() -> Vec<String> {
    vec![
        "/pages/{1}/{0}.html".to_string(),
        "/pages/shared/{0}.html".to_string(),
    ]
}

impl Config {
    /// Load configuration from a toml file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Config = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file does
    /// not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }
}
