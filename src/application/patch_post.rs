//! Persisting patched post sources

use crate::domain::tags::{patch, PatchOutcome, TagSet};
use crate::error::Result;
use crate::infrastructure::PostStore;

/// Splices tags into a post's source and writes the result back unless
/// running dry.
pub struct SourcePatcher<'a, S> {
    store: &'a S,
}

impl<'a, S: PostStore> SourcePatcher<'a, S> {
    pub fn new(store: &'a S) -> Self {
        SourcePatcher { store }
    }

    /// The post is written only when not dry-running and the text actually
    /// changed. On error nothing is written.
    pub fn apply(&self, post: &str, source: &str, tags: TagSet, dry_run: bool) -> Result<PatchOutcome> {
        let outcome = patch::apply(post, source, tags, dry_run)?;

        match outcome.text.as_deref() {
            Some(text) if text != source => {
                self.store.write_text(post, text)?;
                tracing::debug!(post, tags = %outcome.tags, "updated tags");
            }
            Some(_) => tracing::debug!(post, "tags already up to date"),
            None => tracing::debug!(post, tags = %outcome.tags, "dry run, not writing"),
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::MemoryStore;

    const SOURCE: &str = ".. title: A\n.. tags: a, b\n\nBody\n";

    #[test]
    fn test_apply_writes_changed_text() {
        let store = MemoryStore::with_posts(&[("posts/a.rst", SOURCE)]);
        let outcome = SourcePatcher::new(&store)
            .apply("posts/a.rst", SOURCE, TagSet::parse("c"), false)
            .unwrap();

        assert_eq!(outcome.tags, ["c"]);
        assert_eq!(
            store.text("posts/a.rst"),
            ".. title: A\n.. tags: c\n\nBody\n"
        );
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_apply_dry_run_never_writes() {
        let store = MemoryStore::with_posts(&[("posts/a.rst", SOURCE)]);
        let outcome = SourcePatcher::new(&store)
            .apply("posts/a.rst", SOURCE, TagSet::parse("c"), true)
            .unwrap();

        assert_eq!(outcome.text, None);
        assert_eq!(outcome.tags, ["c"]);
        assert_eq!(store.text("posts/a.rst"), SOURCE);
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_apply_skips_unchanged_text() {
        let store = MemoryStore::with_posts(&[("posts/a.rst", SOURCE)]);
        SourcePatcher::new(&store)
            .apply("posts/a.rst", SOURCE, TagSet::parse("a, b"), false)
            .unwrap();
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_apply_malformed_source_leaves_store_untouched() {
        let store = MemoryStore::with_posts(&[("posts/x.rst", "no header")]);
        let result =
            SourcePatcher::new(&store).apply("posts/x.rst", "no header", TagSet::new(), false);
        assert!(result.is_err());
        assert_eq!(store.text("posts/x.rst"), "no header");
        assert_eq!(store.writes(), 0);
    }
}
