//! Structural path addressing for template traversal
//!
//! Every node visited by the walker has a path from the traversal root.
//! Paths are kept as a sequence of segments so that override lookup works
//! segment by segment instead of by rewriting strings. The rendered form is
//! the dotted/bracketed string handed to key processors and path processors:
//!
//! - the root renders as `""`
//! - a mapping field renders as `key` directly under the root, `parent.key` elsewhere
//! - a sequence element renders as `parent[index]`
//! - the wildcard segment renders as `[*]`
//!
//! Copyright (c) 2025 Shapeshifter Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod parser;


pub use error::PathError;
pub use parser::PathParser;

use crate::{Error, Result};
use std::fmt;

/// One step from a parent node to a child node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Mapping field
    Key(String),
    /// Sequence element
    Index(usize),
    /// Any element of a sequence
    Wildcard,
}

/// A position in a value tree, relative to the traversal root
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// The traversal root
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from raw segments
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Parse a rendered path such as `hobbies[*].name`
    pub fn parse(input: &str) -> Result<Self> {
        PathParser::new(input).parse().map_err(|source| Error::InvalidPath {
            path: input.to_string(),
            source,
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments below the root
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Path of a mapping field below this node
    pub fn child_key(&self, key: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Key(key.into()));
        Self { segments }
    }

    /// Path of a sequence element below this node
    pub fn child_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Index(index));
        Self { segments }
    }

    /// The same path with its first index replaced by the wildcard.
    ///
    /// Only the first index is replaced, so `a[0].b[1]` becomes `a[*].b[1]`.
    /// Returns `None` when the path holds no index at all.
    pub fn wildcard(&self) -> Option<Self> {
        let first = self
            .segments
            .iter()
            .position(|segment| matches!(segment, Segment::Index(_)))?;
        let mut segments = self.segments.clone();
        segments[first] = Segment::Wildcard;
        Some(Self { segments })
    }

    /// Whether any segment is the wildcard
    pub fn has_wildcard(&self) -> bool {
        self.segments.iter().any(|s| matches!(s, Segment::Wildcard))
    }

    pub(crate) fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub(crate) fn pop(&mut self) -> Option<Segment> {
        self.segments.pop()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Key(key) => rendered = child_mapping_path(&rendered, key),
                Segment::Index(index) => rendered = child_sequence_path(&rendered, *index),
                Segment::Wildcard => rendered.push_str("[*]"),
            }
        }
        f.write_str(&rendered)
    }
}

impl std::str::FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Rendered path of a mapping field: `key` under the root, `parent.key` elsewhere
pub fn child_mapping_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        let mut path = String::with_capacity(parent.len() + key.len() + 1);
        path.push_str(parent);
        path.push('.');
        path.push_str(key);
        path
    }
}

/// Rendered path of a sequence element: `parent[index]`
pub fn child_sequence_path(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}

/// Rendered wildcard form of a rendered path.
///
/// A path without any index is returned unchanged.
pub fn wildcard_of(path: &str) -> Result<String> {
    let parsed = Path::parse(path)?;
    Ok(parsed
        .wildcard()
        .map(|wild| wild.to_string())
        .unwrap_or_else(|| path.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_mapping_path() {
        assert_eq!(child_mapping_path("", "name"), "name");
        assert_eq!(child_mapping_path("details", "age"), "details.age");
        assert_eq!(child_mapping_path("hobbies[0]", "name"), "hobbies[0].name");
    }

    #[test]
    fn test_child_sequence_path() {
        assert_eq!(child_sequence_path("", 0), "[0]");
        assert_eq!(child_sequence_path("hobbies", 3), "hobbies[3]");
        assert_eq!(child_sequence_path("m[1]", 2), "m[1][2]");
    }

    #[test]
    fn test_display_matches_string_helpers() {
        let path = Path::root()
            .child_key("hobbies")
            .child_index(1)
            .child_key("name");
        assert_eq!(path.to_string(), "hobbies[1].name");

        let nested = Path::root().child_index(0).child_key("a");
        assert_eq!(nested.to_string(), "[0].a");
        assert_eq!(Path::root().to_string(), "");
    }

    #[test]
    fn test_wildcard_replaces_first_index_only() {
        let path = Path::parse("a[0].b[1]").unwrap();
        let wild = path.wildcard().unwrap();
        assert_eq!(wild.to_string(), "a[*].b[1]");
        assert!(wild.has_wildcard());
        assert!(Path::parse("a.b").unwrap().wildcard().is_none());
    }

    #[test]
    fn test_wildcard_of() {
        assert_eq!(wildcard_of("hobbies[12].name").unwrap(), "hobbies[*].name");
        assert_eq!(wildcard_of("details.age").unwrap(), "details.age");
        assert_eq!(wildcard_of("").unwrap(), "");
        assert!(wildcard_of("a[").is_err());
    }

    #[test]
    fn test_parse_and_compare() {
        let parsed: Path = "details.age".parse().unwrap();
        assert_eq!(parsed, Path::root().child_key("details").child_key("age"));
        assert_eq!(parsed.depth(), 2);
        assert!(Path::parse("").unwrap().is_root());
    }

    #[test]
    fn test_invalid_path_error() {
        let err = Path::parse("a[x]").unwrap_err();
        match err {
            Error::InvalidPath { path, source } => {
                assert_eq!(path, "a[x]");
                assert_eq!(source.position(), 2);
            }
            other => panic!("Expected invalid path, got {other:?}"),
        }
    }
}
