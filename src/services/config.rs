//! User configuration (~/.zkill-isk/config.json)

use crate::sources::{DEFAULT_BASE_URL, REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::types::{Result, ZkillError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings read from the config file. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Characters used when none are given on the command line
    pub character_ids: Vec<u64>,
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            character_ids: Vec::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: REQUEST_TIMEOUT_SECS,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Load from the default path. A missing file yields defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from a custom path. A missing file yields defaults,
    /// an unreadable or corrupt one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ZkillError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write the config as pretty JSON, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ZkillError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config path (~/.zkill-isk/config.json)
    pub fn default_path() -> Result<PathBuf> {
        let home = directories::UserDirs::new()
            .ok_or_else(|| ZkillError::Config("Failed to get home directory".into()))?
            .home_dir()
            .to_path_buf();
        Ok(home.join(".zkill-isk").join("config.json"))
    }
}
