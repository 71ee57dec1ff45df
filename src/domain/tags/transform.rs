//! Tag set transformations
//!
//! Every function here is pure: it borrows the current tags and returns a
//! fresh [`TagSet`]. Batch drivers apply the same [`TagOperation`] to each
//! post independently.

use super::TagSet;

/// A mutating tag operation that can be applied to every post of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagOperation {
    Add(TagSet),
    Remove(TagSet),
    /// Ordered tag list; the last element is the destination.
    Merge(TagSet),
    Sort,
}

impl TagOperation {
    pub fn apply(&self, current: &TagSet) -> TagSet {
        match self {
            TagOperation::Add(tags) => add(current, tags),
            TagOperation::Remove(tags) => remove(current, tags),
            TagOperation::Merge(tags) => merge(current, tags),
            TagOperation::Sort => sort(current),
        }
    }

    /// Short name used in logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            TagOperation::Add(_) => "add",
            TagOperation::Remove(_) => "remove",
            TagOperation::Merge(_) => "merge",
            TagOperation::Sort => "sort",
        }
    }
}

/// Append every tag of `to_add` not already present, in the given order.
pub fn add(current: &TagSet, to_add: &TagSet) -> TagSet {
    let mut result = current.clone();
    for tag in to_add {
        result.insert(tag);
    }
    result
}

/// Drop every tag of `to_remove`; absent tags are ignored.
pub fn remove(current: &TagSet, to_remove: &TagSet) -> TagSet {
    current
        .iter()
        .filter(|tag| !to_remove.contains(tag))
        .map(String::as_str)
        .collect()
}

/// Merge all tags of `tag_list` into its last element.
///
/// The destination takes the slot of the first source it replaces, unless it
/// was already present. Lists with fewer than two distinct tags do nothing.
pub fn merge(current: &TagSet, tag_list: &TagSet) -> TagSet {
    let Some((destination, sources)) = tag_list.as_slice().split_last() else {
        return current.clone();
    };
    if sources.is_empty() {
        return current.clone();
    }

    let mut result = current.clone();
    let mut first_removed = None;
    for source in sources {
        if let Some(index) = result.remove(source) {
            first_removed = Some(first_removed.map_or(index, |first: usize| first.min(index)));
        }
    }

    if let Some(index) = first_removed {
        if !result.contains(destination) {
            result.insert_at(index, destination);
        }
    }
    result
}

/// Code-point ascending order.
pub fn sort(current: &TagSet) -> TagSet {
    let mut tags = current.as_slice().to_vec();
    tags.sort();
    tags.into_iter().collect()
}
