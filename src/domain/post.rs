//! A post's source text and the views the tag operations need of it

use crate::domain::tags::{patch, TagSet};
use crate::error::Result;
use pulldown_cmark::{Event, Parser as MdParser, Tag, TagEnd};
use std::path::Path;

/// Markup of a post body, decided by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostFormat {
    Markdown,
    ReStructuredText,
    Plain,
}

impl PostFormat {
    pub fn from_path(path: &str) -> Self {
        match Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("md") | Some("markdown") => PostFormat::Markdown,
            Some("rst") => PostFormat::ReStructuredText,
            _ => PostFormat::Plain,
        }
    }
}

/// A loaded post: its identifier (path relative to the site root) and text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub source: String,
}

impl Post {
    pub fn new(id: impl Into<String>, source: impl Into<String>) -> Self {
        Post {
            id: id.into(),
            source: source.into(),
        }
    }

    pub fn format(&self) -> PostFormat {
        PostFormat::from_path(&self.id)
    }

    pub fn tags(&self) -> Result<TagSet> {
        patch::read_tags(&self.id, &self.source)
    }

    pub fn body(&self) -> Result<&str> {
        patch::body(&self.id, &self.source)
    }

    /// Body text suitable for word extraction. Markdown is reduced to its
    /// text, with code blocks left out.
    pub fn plain_text(&self) -> Result<String> {
        let body = self.body()?;
        Ok(match self.format() {
            PostFormat::Markdown => markdown_text(body),
            PostFormat::ReStructuredText | PostFormat::Plain => body.to_string(),
        })
    }
}

fn markdown_text(markdown: &str) -> String {
    let mut text = String::with_capacity(markdown.len());
    let mut in_code_block = false;

    for event in MdParser::new(markdown) {
        match event {
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            Event::Text(t) if !in_code_block => {
                text.push_str(&t);
                text.push(' ');
            }
            Event::Code(code) => {
                text.push_str(&code);
                text.push(' ');
            }
            Event::SoftBreak | Event::HardBreak | Event::End(TagEnd::Paragraph) => {
                text.push('\n');
            }
            _ => {}
        }
    }

    text
}
