//! Initialize site use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemPostStore};
use std::fs;
use std::path::Path;

/// Initialize posttag for the site at `path`, writing a default config.
pub fn init(path: &Path) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    FileSystemPostStore::initialize(path)?;

    let config = Config::default();
    config.save_to_dir(path)?;
    tracing::debug!(path = %path.display(), "initialized site");

    Ok(config)
}
