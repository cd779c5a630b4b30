//! User configuration for porcelain-state.
//!
//! Stored as pretty JSON in `<config dir>/porcelain-state/config.json`. Every field
//! has a default, so a missing file or a partial file both load cleanly.

use crate::core::cache::{FreshnessCache, DEFAULT_WATCHED_PATHS};
use crate::core::dirs::get_config_directory;
use crate::core::error::{PorcelainError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct StateConfig {
    /// Paths relative to the git directory whose mtimes guard cached state
    pub watched_paths: Vec<PathBuf>,
    /// Default number of reflog entries to read, `None` for all of them
    pub reflog_limit: Option<usize>,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            watched_paths: DEFAULT_WATCHED_PATHS.iter().map(PathBuf::from).collect(),
            reflog_limit: None,
        }
    }
}

impl StateConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(get_config_directory()?.join(CONFIG_FILE_NAME))
    }

    /// Load the user config, falling back to defaults when no file exists
    pub fn load_or_default() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| PorcelainError::config_read_failed(path, e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| PorcelainError::config_parse_failed(path, e))?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| PorcelainError::config_write_failed(parent, e))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| PorcelainError::config_write_failed(path, e))?;
        Ok(())
    }

    /// Build a cache watching the configured paths
    pub fn build_cache(&self) -> FreshnessCache {
        FreshnessCache::with_watched_paths(self.watched_paths.iter().cloned())
    }
}
