//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "posttag")]
#[command(about = "Manage the tags of blog posts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize posttag for a site
    Init {
        /// Site directory (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Add tags to posts
    Add {
        /// Comma-separated tags to add
        tags: String,

        /// Posts to update (default: all posts)
        posts: Vec<String>,

        /// Show the resulting tags without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove tags from posts
    Remove {
        /// Comma-separated tags to remove
        tags: String,

        /// Posts to update (default: all posts)
        posts: Vec<String>,

        /// Show the resulting tags without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Merge tags into the last one given
    Merge {
        /// Comma-separated tags; the last one is kept
        tags: String,

        /// Posts to update (default: all posts)
        posts: Vec<String>,

        /// Show the resulting tags without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Sort each post's tags alphabetically
    Sort {
        /// Posts to update (default: all posts)
        posts: Vec<String>,

        /// Show the resulting tags without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Add tags extracted from each post's text
    Autotag {
        /// Posts to update (default: all posts)
        posts: Vec<String>,

        /// Show the resulting tags without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// List all tags in use
    List {
        /// Ordering: alpha or count
        #[arg(short, long, default_value = "alpha")]
        sort: String,

        /// Posts to read (default: all posts)
        posts: Vec<String>,
    },

    /// Search tags with a regular expression
    Search {
        /// Pattern matched anywhere in a tag
        pattern: String,

        /// Posts to read (default: all posts)
        posts: Vec<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
