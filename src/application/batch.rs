//! Per-post outcomes of batch operations

use crate::domain::TagSet;
use crate::error::{PostTagError, Result};
use crate::infrastructure::PostStore;

/// Which posts a batch operation targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostSelection {
    All,
    Posts(Vec<String>),
}

impl PostSelection {
    /// No arguments, or the single argument `all`, select every post.
    pub fn from_args(posts: Vec<String>) -> Self {
        if posts.is_empty() || (posts.len() == 1 && posts[0] == "all") {
            PostSelection::All
        } else {
            PostSelection::Posts(posts)
        }
    }

    pub fn resolve<S: PostStore>(&self, store: &S) -> Result<Vec<String>> {
        match self {
            PostSelection::All => store.list_posts(),
            PostSelection::Posts(posts) => Ok(posts.clone()),
        }
    }
}

/// Result for one post of a batch
#[derive(Debug)]
pub struct PostOutcome<T> {
    pub post: String,
    pub result: Result<T>,
}

/// Ordered outcomes of a batch, one per targeted post
#[derive(Debug)]
pub struct BatchReport<T> {
    pub dry_run: bool,
    pub outcomes: Vec<PostOutcome<T>>,
}

impl<T> BatchReport<T> {
    pub fn new(dry_run: bool) -> Self {
        BatchReport {
            dry_run,
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, post: &str, result: Result<T>) {
        if let Err(e) = &result {
            tracing::debug!(post, error = %e, "post failed");
        }
        self.outcomes.push(PostOutcome {
            post: post.to_string(),
            result,
        });
    }

    pub fn succeeded(&self) -> impl Iterator<Item = (&str, &T)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|value| (o.post.as_str(), value)))
    }

    pub fn failed(&self) -> impl Iterator<Item = (&str, &PostTagError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.post.as_str(), e)))
    }

    pub fn failure_count(&self) -> usize {
        self.failed().count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed().next().is_some()
    }
}

/// Tags of one post before and after a mutating operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChange {
    pub before: TagSet,
    pub after: TagSet,
}

impl TagChange {
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

/// A read-only aggregate together with the per-post read outcomes it was
/// computed from
#[derive(Debug)]
pub struct Aggregate<T> {
    pub value: T,
    pub report: BatchReport<TagSet>,
}
