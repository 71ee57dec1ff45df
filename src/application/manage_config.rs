//! Config management use case

use crate::error::Result;
use crate::infrastructure::config::CONFIG_KEYS;
use crate::infrastructure::Config;
use std::path::PathBuf;

/// Service for reading and updating a site's configuration
pub struct ConfigService {
    root: PathBuf,
}

impl ConfigService {
    /// Create a new config service for the site at `root`
    pub fn new(root: PathBuf) -> Self {
        ConfigService { root }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        Config::load_from_dir(&self.root)?.get(key)
    }

    /// Set a config value and save it
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from_dir(&self.root)?;
        config.set(key, value)?;
        config.save_to_dir(&self.root)
    }

    /// Every key with its current value
    pub fn list(&self) -> Result<Vec<(String, String)>> {
        let config = Config::load_from_dir(&self.root)?;
        CONFIG_KEYS
            .iter()
            .map(|key| Ok((key.to_string(), config.get(key)?)))
            .collect()
    }
}
