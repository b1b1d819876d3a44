//! Runtime configuration.
//!
//! Resolved from defaults, then `<config_dir>/epicgen/config.json`, then
//! environment variables:
//! - `EPICGEN_BACKEND_URL` - generation backend (default: `http://localhost:8000`)
//! - `EPICGEN_PORT` - view server port (default: `3000`)
//!
//! Command-line flags override all of these.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::Deserialize;

use crate::client::DEFAULT_BACKEND_URL;

const APP_NAME: &str = "epicgen";
const CONFIG_FILE: &str = "config.json";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the generation backend
    pub backend_url: String,
    /// Port the view server listens on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Load from the user's config directory and the environment.
    /// Falls back to defaults if the file is missing or fails to parse.
    pub fn load() -> Self {
        let config = match get_config_path().and_then(|path| Self::load_from(&path)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        };
        config.with_env(|key| std::env::var(key).ok())
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config = serde_json::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Apply environment overrides. `lookup` is `std::env::var` outside tests.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("EPICGEN_BACKEND_URL") {
            self.backend_url = url;
        }
        if let Some(port) = lookup("EPICGEN_PORT") {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(_) => tracing::warn!("Ignoring invalid EPICGEN_PORT: {}", port),
            }
        }
        self.backend_url = self.backend_url.trim_end_matches('/').to_string();
        self
    }
}

fn get_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}
