//! Read-only aggregation over many posts' tags
//!
//! # Examples
//!
//! ```
//! use posttag::domain::tags::{list_tags, search_tags, ListMode, TagSet};
//! use regex::Regex;
//!
//! let posts = vec![TagSet::parse("python, demo"), TagSet::parse("python, blog")];
//! assert_eq!(list_tags(&posts, ListMode::Count)[0], "python");
//! let pattern = Regex::new("^b").unwrap();
//! assert_eq!(search_tags(&posts, &pattern), vec!["blog".to_string()]);
//! ```

use super::TagSet;
use crate::error::{PostTagError, Result};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

/// Ordering for tag listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListMode {
    /// Alphabetical
    #[default]
    Alpha,
    /// Most used first, ties alphabetical
    Count,
}

impl FromStr for ListMode {
    type Err = PostTagError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "alpha" => Ok(ListMode::Alpha),
            "count" => Ok(ListMode::Count),
            _ => Err(PostTagError::InvalidListMode(s.to_string())),
        }
    }
}

/// Number of posts using each tag, most used first, ties alphabetical.
pub fn tag_counts(posts: &[TagSet]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for tags in posts {
        for tag in tags {
            *counts.entry(tag.as_str()).or_default() += 1;
        }
    }

    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    // Stable sort keeps the alphabetical order of the map for equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Every distinct tag across `posts`.
pub fn list_tags(posts: &[TagSet], mode: ListMode) -> Vec<String> {
    match mode {
        ListMode::Alpha => distinct_tags(posts).into_iter().map(str::to_string).collect(),
        ListMode::Count => tag_counts(posts).into_iter().map(|(tag, _)| tag).collect(),
    }
}

/// Distinct tags containing a match for `pattern` anywhere, sorted.
pub fn search_tags(posts: &[TagSet], pattern: &Regex) -> Vec<String> {
    distinct_tags(posts)
        .into_iter()
        .filter(|tag| pattern.is_match(tag))
        .map(str::to_string)
        .collect()
}

fn distinct_tags(posts: &[TagSet]) -> BTreeSet<&str> {
    posts
        .iter()
        .flat_map(|tags| tags.iter().map(String::as_str))
        .collect()
}
