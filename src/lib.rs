//! posttag - Tag management for blog posts
//!
//! Adds, removes, merges, sorts, lists, searches and auto-derives the tags
//! stored in the `.. tags:` metadata line of each post, rewriting only that
//! line and offering a dry run for every change.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::PostTagError;
