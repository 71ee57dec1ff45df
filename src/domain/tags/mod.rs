//! Tag system

pub mod autotag;
pub mod patch;
pub mod query;
pub mod tag_set;
pub mod transform;

// Re-export main types
pub use autotag::{
    is_valid_tag, AutoTagSettings, AutoTagger, FrequencyStrategy, KeyTokenExtractor,
    LinguisticStrategy, StrategyKind, TagStrategy,
};
pub use patch::{read_tags, splice_tags, HeaderLayout, PatchOutcome};
pub use query::{list_tags, search_tags, tag_counts, ListMode};
pub use tag_set::TagSet;
pub use transform::TagOperation;
