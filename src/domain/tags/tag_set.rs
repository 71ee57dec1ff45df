//! Ordered, duplicate-free tag sequences and the comma-separated header format

use std::fmt;

/// Separator used when writing a tag list back into a post header.
pub const TAG_SEPARATOR: &str = ", ";

/// Ordered sequence of unique, case-sensitive tags.
///
/// Order is the order tags were written (or inserted); no element is empty
/// and no element contains the separator or a line break.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw header value such as `"python, demo, blog"`.
    pub fn parse(raw: &str) -> Self {
        raw.split(',').collect()
    }

    /// Insert a tag at the end. Returns false when the tag was dropped
    /// (empty, contains a comma or line break) or is already present.
    pub fn insert(&mut self, tag: &str) -> bool {
        match normalize(tag) {
            Some(tag) if !self.contains(tag) => {
                self.tags.push(tag.to_string());
                true
            }
            _ => false,
        }
    }

    /// Insert a tag at `index`, clamped to the current length.
    pub fn insert_at(&mut self, index: usize, tag: &str) -> bool {
        match normalize(tag) {
            Some(tag) if !self.contains(tag) => {
                let index = index.min(self.tags.len());
                self.tags.insert(index, tag.to_string());
                true
            }
            _ => false,
        }
    }

    /// Remove a tag, returning the index it occupied.
    pub fn remove(&mut self, tag: &str) -> Option<usize> {
        let index = self.position(tag)?;
        self.tags.remove(index);
        Some(index)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn position(&self, tag: &str) -> Option<usize> {
        self.tags.iter().position(|t| t == tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.tags.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tags
    }

    /// Serialize for the header, joined with `", "`.
    pub fn to_raw(&self) -> String {
        self.tags.join(TAG_SEPARATOR)
    }
}

/// Trim a tag and reject the shapes the header format cannot carry.
fn normalize(tag: &str) -> Option<&str> {
    let tag = tag.trim();
    if tag.is_empty() {
        return None;
    }
    if tag.contains([',', '\r', '\n']) {
        tracing::warn!(tag, "dropping tag containing a separator or line break");
        return None;
    }
    Some(tag)
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_raw())
    }
}

impl<'a> FromIterator<&'a str> for TagSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

impl FromIterator<String> for TagSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(&tag);
        }
        set
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

impl PartialEq<[&str]> for TagSet {
    fn eq(&self, other: &[&str]) -> bool {
        self.tags.len() == other.len() && self.tags.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for TagSet {
    fn eq(&self, other: &[&str; N]) -> bool {
        self == &other[..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_drops_empty() {
        let tags = TagSet::parse("  python,demo , ,nikola,, blog ");
        assert_eq!(tags, ["python", "demo", "nikola", "blog"]);
    }

    #[test]
    fn test_parse_drops_duplicates_keeping_first() {
        let tags = TagSet::parse("b, a, b, A");
        assert_eq!(tags, ["b", "a", "A"]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(TagSet::parse("").is_empty());
        assert!(TagSet::parse(" , ").is_empty());
    }

    #[test]
    fn test_raw_round_trip() {
        let tags = TagSet::parse("python,demo,  nikola");
        let raw = tags.to_raw();
        assert_eq!(raw, "python, demo, nikola");
        assert_eq!(TagSet::parse(&raw).to_raw(), raw);
    }

    #[test]
    fn test_insert_rejects_separator_and_line_breaks() {
        let mut tags = TagSet::new();
        assert!(!tags.insert("a,b"));
        assert!(!tags.insert("line\nbreak"));
        assert!(!tags.insert("   "));
        assert!(tags.insert("ok"));
        assert!(!tags.insert("ok"));
        assert_eq!(tags, ["ok"]);
    }

    #[test]
    fn test_insert_at_and_remove() {
        let mut tags = TagSet::parse("a, c");
        assert!(tags.insert_at(1, "b"));
        assert!(tags.insert_at(99, "d"));
        assert_eq!(tags, ["a", "b", "c", "d"]);
        assert_eq!(tags.remove("b"), Some(1));
        assert_eq!(tags.remove("missing"), None);
        assert_eq!(tags.to_string(), "a, c, d");
    }

    #[test]
    fn test_case_sensitive() {
        let tags = TagSet::parse("Rust, rust");
        assert_eq!(tags.len(), 2);
        assert!(tags.contains("Rust"));
        assert!(!tags.contains("RUST"));
    }
}
