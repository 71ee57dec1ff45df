//! Application layer - Use cases and orchestration

pub mod auto_tag;
pub mod batch;
pub mod init;
pub mod list_tags;
pub mod manage_config;
pub mod modify_tags;
pub mod patch_post;

pub use auto_tag::AutoTagService;
pub use batch::{Aggregate, BatchReport, PostOutcome, PostSelection, TagChange};
pub use list_tags::ListTagsService;
pub use manage_config::ConfigService;
pub use modify_tags::ModifyTagsService;
pub use patch_post::SourcePatcher;
