//! Auto-tag use case

use crate::application::batch::{BatchReport, PostSelection, TagChange};
use crate::application::patch_post::SourcePatcher;
use crate::domain::tags::{transform, AutoTagger, TagSet};
use crate::domain::Post;
use crate::error::Result;
use crate::infrastructure::PostStore;

/// Service adding extracted candidate tags to posts.
pub struct AutoTagService<S> {
    store: S,
    tagger: AutoTagger,
}

impl<S: PostStore> AutoTagService<S> {
    pub fn new(store: S, tagger: AutoTagger) -> Self {
        AutoTagService { store, tagger }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Candidate tags for one post's body, without touching the post.
    pub fn candidates(&self, post: &str) -> Result<Vec<String>> {
        let post = Post::new(post, self.store.read_text(post)?);
        Ok(self.tagger.tag(&post.plain_text()?))
    }

    /// Add each post's candidates to its tags.
    pub fn execute(&self, selection: &PostSelection, dry_run: bool) -> Result<BatchReport<TagChange>> {
        let posts = selection.resolve(&self.store)?;
        tracing::debug!(
            strategy = self.tagger.strategy_name(),
            posts = posts.len(),
            dry_run,
            "auto-tagging"
        );

        let mut report = BatchReport::new(dry_run);
        for post in &posts {
            report.push(post, self.tag_post(post, dry_run));
        }
        Ok(report)
    }

    fn tag_post(&self, id: &str, dry_run: bool) -> Result<TagChange> {
        let post = Post::new(id, self.store.read_text(id)?);
        let before = post.tags()?;
        let candidates: TagSet = self.tagger.tag(&post.plain_text()?).into_iter().collect();
        let after = transform::add(&before, &candidates);
        let outcome = SourcePatcher::new(&self.store).apply(id, &post.source, after, dry_run)?;
        Ok(TagChange {
            before,
            after: outcome.tags,
        })
    }
}
