//! File system post store

use crate::error::{PostTagError, Result};
use crate::infrastructure::config::SITE_DIR;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Storage the tag operations read posts from and write them back to.
///
/// Post identifiers are `/`-separated paths relative to the site root.
pub trait PostStore {
    /// Read a post's full text. Missing posts are `PostNotFound`.
    fn read_text(&self, post: &str) -> Result<String>;

    /// Replace a post's full text.
    fn write_text(&self, post: &str, text: &str) -> Result<()>;

    /// Every post identifier, sorted.
    fn list_posts(&self) -> Result<Vec<String>>;
}

/// Post store backed by a site directory
#[derive(Debug, Clone)]
pub struct FileSystemPostStore {
    pub root: PathBuf,
    pub config: Config,
}

impl FileSystemPostStore {
    /// Create a store for the given root directory
    pub fn new(root: PathBuf, config: Config) -> Self {
        FileSystemPostStore { root, config }
    }

    /// Open an initialized site, loading its configuration
    pub fn open(root: PathBuf) -> Result<Self> {
        let config = Config::load_from_dir(&root)?;
        Ok(Self::new(root, config))
    }

    /// Discover the site root by walking up from the current directory.
    /// POSTTAG_ROOT takes precedence when set.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("POSTTAG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_site_dir(&path) {
                return Self::open(path);
            } else {
                return Err(PostTagError::Config(format!(
                    "POSTTAG_ROOT is set to '{}' but no {} directory found. \
                    Run 'posttag init' in that directory or unset POSTTAG_ROOT.",
                    path.display(),
                    SITE_DIR
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the site root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_site_dir(&current) {
                return Self::open(current);
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(PostTagError::NotSiteDirectory(start.to_path_buf())),
            }
        }
    }

    /// Create the .posttag directory; fails when it already exists
    pub fn initialize(root: &Path) -> Result<()> {
        let site_dir = root.join(SITE_DIR);

        if site_dir.exists() {
            return Err(PostTagError::Config(format!(
                "Directory already initialized: {}",
                root.display()
            )));
        }

        fs::create_dir_all(&site_dir)?;
        Ok(())
    }

    fn has_site_dir(path: &Path) -> bool {
        path.join(SITE_DIR).is_dir()
    }

    fn has_post_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.config
                    .extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }

    fn normalize_relative_path(path: &Path) -> Option<String> {
        let parts: Vec<&str> = path
            .iter()
            .map(|part| part.to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }

    /// Write using a best-effort atomic replace: write to a temp file in the
    /// same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    fn write_atomic(path: &Path, content: &str) -> Result<()> {
        let tmp_name = format!(
            "{}.posttag-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("post"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

impl PostStore for FileSystemPostStore {
    fn read_text(&self, post: &str) -> Result<String> {
        let path = self.root.join(post);

        if !path.is_file() {
            return Err(PostTagError::PostNotFound(post.to_string()));
        }

        fs::read_to_string(&path).map_err(PostTagError::Io)
    }

    fn write_text(&self, post: &str, text: &str) -> Result<()> {
        let path = self.root.join(post);

        if !path.is_file() {
            return Err(PostTagError::PostNotFound(post.to_string()));
        }

        Self::write_atomic(&path, text)
    }

    fn list_posts(&self) -> Result<Vec<String>> {
        let posts_root = self.root.join(&self.config.posts_dir);
        if !posts_root.is_dir() {
            return Ok(Vec::new());
        }

        let walker = WalkDir::new(&posts_root).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        let mut posts = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| PostTagError::Io(e.into()))?;
            if !entry.file_type().is_file() || !self.has_post_extension(entry.path()) {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            if let Some(post) = Self::normalize_relative_path(rel) {
                posts.push(post);
            }
        }

        posts.sort();
        Ok(posts)
    }
}
