//! Error types for posttag

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for posttag
#[derive(Debug, Error)]
pub enum PostTagError {
    #[error("Not a posttag site: {0}")]
    NotSiteDirectory(PathBuf),

    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Cannot patch {post}: {reason}")]
    PatchConsistency { post: String, reason: String },

    #[error("Invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Invalid list mode: {0}")]
    InvalidListMode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse config.toml: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl PostTagError {
    /// Build a patch error for a post whose header cannot be located.
    pub fn patch(post: impl Into<String>, reason: impl Into<String>) -> Self {
        PostTagError::PatchConsistency {
            post: post.into(),
            reason: reason.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PostTagError::NotSiteDirectory(_) => 2,
            PostTagError::PostNotFound(_) => 3,
            PostTagError::PatchConsistency { .. } => 4,
            PostTagError::InvalidPattern(_) | PostTagError::InvalidListMode(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PostTagError::NotSiteDirectory(path) => {
                format!(
                    "Not a posttag site: {}\n\n\
                    Suggestions:\n\
                    • Run 'posttag init' in the site directory\n\
                    • Navigate to an existing site directory\n\
                    • Set POSTTAG_ROOT environment variable to your site path",
                    path.display()
                )
            }
            PostTagError::PostNotFound(post) => {
                format!(
                    "Post not found: '{}'\n\n\
                    Suggestions:\n\
                    • Post paths are relative to the site root (e.g., posts/hello.rst)\n\
                    • Omit post arguments to operate on all posts",
                    post
                )
            }
            PostTagError::PatchConsistency { post, reason } => {
                format!(
                    "Cannot patch {}: {}\n\n\
                    A post must start with metadata lines such as:\n\
                    .. title: Hello\n\
                    .. tags: python, blog",
                    post, reason
                )
            }
            PostTagError::InvalidListMode(mode) => {
                format!(
                    "Invalid list mode: '{}'\n\n\
                    Valid modes: alpha, count\n\
                    Example: posttag list --sort count",
                    mode
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PostTagError
pub type Result<T> = std::result::Result<T, PostTagError>;
