//! # Path Descriptors
//!
//! A path descriptor tells a rule where the node it is inspecting lives
//! inside the larger document. Rules only use it to label findings; it
//! never changes whether a finding is produced.
//!
//! The descriptor's `target` is an ordered list of segments, e.g.
//! `["paths", "/pets", "get", "parameters", 0, "schema"]`. Object keys are
//! strings; array positions are non-negative integers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One step in a navigation path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Position within an array.
    Index(u64),
    /// Key within an object.
    Key(String),
}

impl PathSegment {
    /// Parse a segment from command-line style text.
    ///
    /// Text in canonical decimal form (`"0"`, `"12"`) becomes an index;
    /// anything else, including `"007"`, stays a key so that it renders
    /// back exactly as written.
    pub fn parse(text: &str) -> Self {
        match text.parse::<u64>() {
            Ok(index) if index.to_string() == text => Self::Index(index),
            _ => Self::Key(text.to_string()),
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Key(key) => f.write_str(key),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<u64> for PathSegment {
    fn from(index: u64) -> Self {
        Self::Index(index)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index as u64)
    }
}

/// Location metadata handed to a rule alongside the node.
///
/// Fields other than `target` are ignored when deserializing, so
/// descriptors produced by richer hosts can be passed through as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathDescriptor {
    /// Navigation path to the node within the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Vec<PathSegment>>,
}

impl PathDescriptor {
    /// An empty descriptor with no target.
    pub fn new() -> Self {
        Self::default()
    }

    /// A descriptor targeting the given segments, in order.
    pub fn with_target<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PathSegment>,
    {
        Self {
            target: Some(segments.into_iter().map(Into::into).collect()),
        }
    }

    /// The target segments, if the descriptor carries any.
    pub fn target(&self) -> Option<&[PathSegment]> {
        self.target.as_deref()
    }

    /// The target joined with `.`; `None` when absent or empty.
    pub fn dotted_target(&self) -> Option<String> {
        let segments = self.target().filter(|s| !s.is_empty())?;
        let rendered: Vec<String> = segments.iter().map(ToString::to_string).collect();
        Some(rendered.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dotted_target_joins_segments() {
        let paths = PathDescriptor::with_target(["a", "b", "c"]);
        assert_eq!(paths.dotted_target().as_deref(), Some("a.b.c"));
    }

    #[test]
    fn dotted_target_absent_or_empty_is_none() {
        assert_eq!(PathDescriptor::new().dotted_target(), None);
        let empty = PathDescriptor::with_target(Vec::<PathSegment>::new());
        assert_eq!(empty.dotted_target(), None);
    }

    #[test]
    fn index_segments_render_as_decimal() {
        let paths = PathDescriptor {
            target: Some(vec!["parameters".into(), 0u64.into(), "schema".into()]),
        };
        assert_eq!(paths.dotted_target().as_deref(), Some("parameters.0.schema"));
    }

    #[test]
    fn segments_containing_dots_are_not_escaped() {
        let paths = PathDescriptor::with_target(["info", "x-version.major"]);
        assert_eq!(paths.dotted_target().as_deref(), Some("info.x-version.major"));
    }

    #[test]
    fn deserializes_mixed_segments() {
        let paths: PathDescriptor =
            serde_json::from_value(json!({ "target": ["paths", 3, "name"] })).unwrap();
        assert_eq!(
            paths.target(),
            Some(&[PathSegment::from("paths"), PathSegment::Index(3), PathSegment::from("name")][..])
        );
    }

    #[test]
    fn deserialize_ignores_unknown_fields() {
        let paths: PathDescriptor =
            serde_json::from_value(json!({ "given": ["$"], "target": ["a"] })).unwrap();
        assert_eq!(paths.dotted_target().as_deref(), Some("a"));
    }

    #[test]
    fn deserialize_empty_object_has_no_target() {
        let paths: PathDescriptor = serde_json::from_value(json!({})).unwrap();
        assert!(paths.target().is_none());
    }

    #[test]
    fn serialize_omits_absent_target() {
        assert_eq!(serde_json::to_value(PathDescriptor::new()).unwrap(), json!({}));
    }

    #[test]
    fn parse_canonical_integers_as_index() {
        assert_eq!(PathSegment::parse("0"), PathSegment::Index(0));
        assert_eq!(PathSegment::parse("42"), PathSegment::Index(42));
    }

    #[test]
    fn parse_keeps_non_canonical_text_as_key() {
        assert_eq!(PathSegment::parse("007"), PathSegment::from("007"));
        assert_eq!(PathSegment::parse("-1"), PathSegment::from("-1"));
        assert_eq!(PathSegment::parse("+1"), PathSegment::from("+1"));
        assert_eq!(PathSegment::parse("name"), PathSegment::from("name"));
    }
}
