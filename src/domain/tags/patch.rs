//! Surgical rewriting of the `tags` header field
//!
//! A post starts with metadata lines of the form `.. name: value`, optionally
//! wrapped in an HTML comment for Markdown posts:
//!
//! ```text
//! <!--
//! .. title: Hello
//! .. tags: python, blog
//! -->
//!
//! Body text.
//! ```
//!
//! Only the value of the first `tags` line is ever replaced; every other byte
//! of the source is carried over unchanged.

use super::TagSet;
use crate::error::{PostTagError, Result};
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// Name of the header field holding the tag list.
pub const TAGS_FIELD: &str = "tags";

fn field_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\.\.[ \t]+([A-Za-z][\w-]*):").unwrap())
}

/// One `.. name: value` line of the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderField {
    pub name: String,
    /// Byte range of everything after the colon, line ending excluded.
    pub value: Range<usize>,
    /// Byte range of the line ending (`\n`, `\r\n` or empty at end of file).
    pub line_ending: Range<usize>,
}

/// Byte layout of a post's header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout {
    pub fields: Vec<HeaderField>,
    /// Offset where the body starts (after the closing `-->` when present).
    pub body_start: usize,
}

impl HeaderLayout {
    /// Locate the metadata header of `source`.
    pub fn locate(source: &str) -> std::result::Result<Self, String> {
        let mut lines = LineCursor::new(source).peekable();
        let mut in_comment = false;

        if let Some(line) = lines.peek() {
            if source[line.content.clone()].trim() == "<!--" {
                in_comment = true;
                lines.next();
            }
        }

        let mut fields = Vec::new();
        let mut body_start = 0;
        while let Some(line) = lines.peek() {
            let text = &source[line.content.clone()];
            let Some(captures) = field_regex().captures(text) else {
                break;
            };
            let colon_end = line.content.start + captures[0].len();
            fields.push(HeaderField {
                name: captures[1].to_string(),
                value: colon_end..line.content.end,
                line_ending: line.content.end..line.end,
            });
            body_start = line.end;
            lines.next();
        }

        if fields.is_empty() {
            return Err("no metadata header found".to_string());
        }

        if in_comment {
            match lines.next() {
                Some(line) if source[line.content.clone()].trim() == "-->" => {
                    body_start = line.end;
                }
                _ => return Err("metadata comment is not closed with -->".to_string()),
            }
        }

        Ok(HeaderLayout { fields, body_start })
    }

    pub fn field(&self, name: &str) -> Option<&HeaderField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[derive(Debug, Clone)]
struct Line {
    content: Range<usize>,
    end: usize,
}

/// Iterates lines as byte ranges, separating content from line endings.
struct LineCursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    fn new(source: &'a str) -> Self {
        LineCursor { source, pos: 0 }
    }
}

impl Iterator for LineCursor<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        if self.pos >= self.source.len() {
            return None;
        }
        let start = self.pos;
        let rest = &self.source[start..];
        let (content_end, end) = match rest.find('\n') {
            Some(i) if i > 0 && rest.as_bytes()[i - 1] == b'\r' => (start + i - 1, start + i + 1),
            Some(i) => (start + i, start + i + 1),
            None => (self.source.len(), self.source.len()),
        };
        self.pos = end;
        Some(Line {
            content: start..content_end,
            end,
        })
    }
}

/// Result of applying new tags to a post's source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    /// Patched text, `None` under dry run.
    pub text: Option<String>,
    /// The tags the post carries (or would carry) afterwards.
    pub tags: TagSet,
}

/// Tags currently written in the header; empty when the field is absent.
pub fn read_tags(post: &str, source: &str) -> Result<TagSet> {
    let layout = HeaderLayout::locate(source).map_err(|reason| PostTagError::patch(post, reason))?;
    Ok(layout
        .field(TAGS_FIELD)
        .map(|field| TagSet::parse(&source[field.value.clone()]))
        .unwrap_or_default())
}

/// Everything after the header.
pub fn body<'a>(post: &str, source: &'a str) -> Result<&'a str> {
    let layout = HeaderLayout::locate(source).map_err(|reason| PostTagError::patch(post, reason))?;
    Ok(&source[layout.body_start..])
}

/// Return `source` with the tags field set to `tags`, inserting the field
/// after the last header line when it does not exist yet. An empty set is
/// never inserted.
pub fn splice_tags(post: &str, source: &str, tags: &TagSet) -> Result<String> {
    let layout = HeaderLayout::locate(source).map_err(|reason| PostTagError::patch(post, reason))?;
    let raw = tags.to_raw();

    let mut patched = String::with_capacity(source.len() + raw.len() + 12);
    match layout.field(TAGS_FIELD) {
        Some(field) => {
            let old = &source[field.value.clone()];
            let spacing = &old[..old.len() - old.trim_start().len()];
            let spacing = if spacing.is_empty() && !raw.is_empty() {
                " "
            } else {
                spacing
            };
            patched.push_str(&source[..field.value.start]);
            patched.push_str(spacing);
            patched.push_str(&raw);
            patched.push_str(&source[field.value.end..]);
        }
        // An absent field already reads as no tags
        None if tags.is_empty() => patched.push_str(source),
        None => {
            let Some(last) = layout.fields.last() else {
                return Err(PostTagError::patch(post, "no metadata header found"));
            };
            let ending = &source[last.line_ending.clone()];
            patched.push_str(&source[..last.line_ending.end]);
            if ending.is_empty() {
                patched.push('\n');
            }
            patched.push_str(&format!(".. {}: {}", TAGS_FIELD, raw));
            patched.push_str(ending);
            patched.push_str(&source[last.line_ending.end..]);
        }
    }
    Ok(patched)
}

/// Compute the patched source. Under dry run only the tags are returned.
pub fn apply(post: &str, source: &str, tags: TagSet, dry_run: bool) -> Result<PatchOutcome> {
    let patched = splice_tags(post, source, &tags)?;
    Ok(PatchOutcome {
        text: if dry_run { None } else { Some(patched) },
        tags,
    })
}
