//! Add, remove, merge and sort use cases

use crate::application::batch::{BatchReport, PostSelection, TagChange};
use crate::application::patch_post::SourcePatcher;
use crate::domain::tags::{patch, TagOperation, TagSet};
use crate::error::Result;
use crate::infrastructure::PostStore;

/// Service applying one tag operation to a batch of posts.
pub struct ModifyTagsService<S> {
    store: S,
}

impl<S: PostStore> ModifyTagsService<S> {
    pub fn new(store: S) -> Self {
        ModifyTagsService { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add(&self, tags: &str, selection: &PostSelection, dry_run: bool) -> Result<BatchReport<TagChange>> {
        self.execute(&TagOperation::Add(TagSet::parse(tags)), selection, dry_run)
    }

    pub fn remove(&self, tags: &str, selection: &PostSelection, dry_run: bool) -> Result<BatchReport<TagChange>> {
        self.execute(&TagOperation::Remove(TagSet::parse(tags)), selection, dry_run)
    }

    /// `tags` is a comma-separated list whose last element is the destination.
    pub fn merge(&self, tags: &str, selection: &PostSelection, dry_run: bool) -> Result<BatchReport<TagChange>> {
        self.execute(&TagOperation::Merge(TagSet::parse(tags)), selection, dry_run)
    }

    pub fn sort(&self, selection: &PostSelection, dry_run: bool) -> Result<BatchReport<TagChange>> {
        self.execute(&TagOperation::Sort, selection, dry_run)
    }

    /// Apply `operation` to every selected post. Failures are recorded per
    /// post and do not stop the batch.
    pub fn execute(
        &self,
        operation: &TagOperation,
        selection: &PostSelection,
        dry_run: bool,
    ) -> Result<BatchReport<TagChange>> {
        let posts = selection.resolve(&self.store)?;
        tracing::debug!(operation = operation.name(), posts = posts.len(), dry_run, "running batch");

        let mut report = BatchReport::new(dry_run);
        for post in &posts {
            report.push(post, self.modify_post(post, operation, dry_run));
        }
        Ok(report)
    }

    fn modify_post(&self, post: &str, operation: &TagOperation, dry_run: bool) -> Result<TagChange> {
        let source = self.store.read_text(post)?;
        let before = patch::read_tags(post, &source)?;
        let after = operation.apply(&before);
        let outcome = SourcePatcher::new(&self.store).apply(post, &source, after, dry_run)?;
        Ok(TagChange {
            before,
            after: outcome.tags,
        })
    }
}
