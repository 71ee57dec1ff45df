//! Domain layer - Business logic and domain models

pub mod post;
pub mod tags;

pub use post::{Post, PostFormat};
pub use tags::TagSet;
