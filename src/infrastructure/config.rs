//! Configuration management

use crate::domain::tags::{AutoTagSettings, StrategyKind};
use crate::error::{PostTagError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Directory marking a site root.
pub const SITE_DIR: &str = ".posttag";

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const CONFIG_KEYS: &[&str] = &[
    "posts_dir",
    "extensions",
    "autotag.max_candidates",
    "autotag.min_token_length",
    "autotag.strategy",
    "autotag.extra_stop_words",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory (relative to the site root) holding the posts
    pub posts_dir: String,
    /// File extensions treated as posts
    pub extensions: Vec<String>,
    pub autotag: AutoTagSettings,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            posts_dir: "posts".to_string(),
            extensions: ["rst", "md", "markdown", "txt"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            autotag: AutoTagSettings::default(),
        }
    }
}

impl Config {
    /// Load config from .posttag/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(SITE_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PostTagError::NotSiteDirectory(path.to_path_buf())
            } else {
                PostTagError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .posttag/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let site_dir = path.join(SITE_DIR);
        let config_path = site_dir.join("config.toml");

        if !site_dir.exists() {
            fs::create_dir(&site_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Read a single value as text
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "posts_dir" => self.posts_dir.clone(),
            "extensions" => self.extensions.join(","),
            "autotag.max_candidates" => self.autotag.max_candidates.to_string(),
            "autotag.min_token_length" => self.autotag.min_token_length.to_string(),
            "autotag.strategy" => strategy_name(self.autotag.strategy).to_string(),
            "autotag.extra_stop_words" => self.autotag.extra_stop_words.join(","),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Update a single value from text
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "posts_dir" => {
                if value.trim().is_empty() {
                    return Err(PostTagError::Config("posts_dir cannot be empty".to_string()));
                }
                self.posts_dir = value.trim().to_string();
            }
            "extensions" => self.extensions = split_list(value),
            "autotag.max_candidates" => self.autotag.max_candidates = parse_count(key, value)?,
            "autotag.min_token_length" => {
                self.autotag.min_token_length = parse_count(key, value)?
            }
            "autotag.strategy" => {
                self.autotag.strategy = match value.trim().to_lowercase().as_str() {
                    "frequency" => StrategyKind::Frequency,
                    "linguistic" => StrategyKind::Linguistic,
                    _ => {
                        return Err(PostTagError::Config(format!(
                            "Invalid strategy: {}. Valid strategies: frequency, linguistic",
                            value
                        )))
                    }
                }
            }
            "autotag.extra_stop_words" => self.autotag.extra_stop_words = split_list(value),
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn strategy_name(kind: StrategyKind) -> &'static str {
    match kind {
        StrategyKind::Frequency => "frequency",
        StrategyKind::Linguistic => "linguistic",
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_count(key: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|_| PostTagError::Config(format!("Invalid value for {}: {}", key, value)))
}

fn unknown_key(key: &str) -> PostTagError {
    PostTagError::Config(format!(
        "Unknown config key: {}. Valid keys: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.posts_dir, "posts");
        assert!(config.extensions.contains(&"rst".to_string()));
        assert_eq!(config.autotag.max_candidates, 5);
        assert_eq!(config.autotag.strategy, StrategyKind::Frequency);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.posts_dir = "content".to_string();
        config.autotag.strategy = StrategyKind::Linguistic;

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(".posttag/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(SITE_DIR)).unwrap();
        fs::write(
            temp.path().join(".posttag/config.toml"),
            "posts_dir = \"blog\"\n\n[autotag]\nmax_candidates = 3\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.posts_dir, "blog");
        assert_eq!(loaded.autotag.max_candidates, 3);
        assert_eq!(loaded.autotag.min_token_length, 3);
        assert_eq!(loaded.extensions, Config::default().extensions);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let result = Config::load_from_dir(temp.path());
        match result.unwrap_err() {
            PostTagError::NotSiteDirectory(_) => {}
            other => panic!("Expected NotSiteDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(SITE_DIR)).unwrap();
        fs::write(temp.path().join(".posttag/config.toml"), "posts_dir = [\n").unwrap();

        match Config::load_from_dir(temp.path()).unwrap_err() {
            PostTagError::TomlDeserialize(_) => {}
            other => panic!("Expected TomlDeserialize error, got {:?}", other),
        }
    }

    #[test]
    fn test_get_and_set() {
        let mut config = Config::default();
        config.set("autotag.max_candidates", "7").unwrap();
        config.set("autotag.strategy", "Linguistic").unwrap();
        config.set("extensions", "md, rst").unwrap();

        assert_eq!(config.get("autotag.max_candidates").unwrap(), "7");
        assert_eq!(config.get("autotag.strategy").unwrap(), "linguistic");
        assert_eq!(config.get("extensions").unwrap(), "md,rst");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("autotag.max_candidates", "many").is_err());
        assert!(config.set("autotag.strategy", "magic").is_err());
        assert!(config.set("posts_dir", "  ").is_err());
        assert!(config.set("nope", "1").is_err());
        assert!(config.get("nope").is_err());
    }
}
