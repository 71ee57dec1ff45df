//! List and search tags use cases

use crate::application::batch::{Aggregate, BatchReport, PostSelection};
use crate::domain::tags::{self, patch, ListMode, TagSet};
use crate::error::Result;
use crate::infrastructure::PostStore;
use regex::Regex;

/// Service for read-only queries over the tags used in posts.
pub struct ListTagsService<S> {
    store: S,
}

impl<S: PostStore> ListTagsService<S> {
    /// Create a new list tags service.
    pub fn new(store: S) -> Self {
        ListTagsService { store }
    }

    /// Read the tags of every selected post. Unreadable posts are reported
    /// and left out.
    pub fn collect(&self, selection: &PostSelection) -> Result<BatchReport<TagSet>> {
        let posts = selection.resolve(&self.store)?;
        let mut report = BatchReport::new(true);
        for post in &posts {
            let tags = self
                .store
                .read_text(post)
                .and_then(|source| patch::read_tags(post, &source));
            report.push(post, tags);
        }
        Ok(report)
    }

    /// Distinct tags, alphabetically or most used first.
    pub fn list(&self, selection: &PostSelection, mode: ListMode) -> Result<Aggregate<Vec<String>>> {
        let report = self.collect(selection)?;
        let value = tags::list_tags(&snapshot(&report), mode);
        Ok(Aggregate { value, report })
    }

    /// Tags with the number of posts using them, most used first.
    pub fn counts(&self, selection: &PostSelection) -> Result<Aggregate<Vec<(String, usize)>>> {
        let report = self.collect(selection)?;
        let value = tags::tag_counts(&snapshot(&report));
        Ok(Aggregate { value, report })
    }

    /// Distinct tags matching `pattern` anywhere, sorted.
    pub fn search(&self, selection: &PostSelection, pattern: &str) -> Result<Aggregate<Vec<String>>> {
        // Reject a bad pattern before reading any post
        let pattern = Regex::new(pattern)?;
        let report = self.collect(selection)?;
        let value = tags::search_tags(&snapshot(&report), &pattern);
        Ok(Aggregate { value, report })
    }
}

fn snapshot(report: &BatchReport<TagSet>) -> Vec<TagSet> {
    report.succeeded().map(|(_, tags)| tags.clone()).collect()
}
