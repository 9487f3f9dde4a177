//! Case-insensitive tag type for labelling notes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A case-insensitive label attached to a note for filtering.
///
/// Tags are normalized to lowercase internally, making `Work`, `work`, and
/// `WORK` the same tag. Notes keep their tags in a sorted set, so ordering
/// of tags is always alphabetical.
///
/// # Validation Rules
/// - Non-empty after trimming
/// - No whitespace inside the tag
/// - No commas (tags are displayed comma-separated)
///
/// # Examples
///
/// ```
/// use notekeeper::domain::Tag;
///
/// let tag = Tag::new("Work").unwrap();
/// assert_eq!(tag.as_str(), "work");
/// assert_eq!(tag, Tag::new("WORK").unwrap());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String); // Always stored lowercase

/// Error returned when parsing an invalid tag.
#[derive(Debug, Clone)]
pub struct ParseTagError(String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTagError {}

impl Tag {
    /// Creates a new Tag, trimming and lowercasing the input.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if the tag is empty, contains whitespace, or
    /// contains a comma.
    pub fn new(s: &str) -> Result<Self, ParseTagError> {
        let normalized = s.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(ParseTagError("tag cannot be empty".to_string()));
        }

        if normalized.chars().any(|c| c.is_whitespace() || c == ',') {
            return Err(ParseTagError(format!(
                "invalid tag '{}': tags cannot contain spaces or commas",
                normalized
            )));
        }

        Ok(Self(normalized))
    }

    /// Returns the normalized tag value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\")", self.0)
    }
}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    #[test]
    fn new_lowercases() {
        assert_eq!(Tag::new("Urgent").unwrap().as_str(), "urgent");
    }

    #[test]
    fn new_trims_surrounding_whitespace() {
        assert_eq!(Tag::new("  home ").unwrap().as_str(), "home");
    }

    #[test]
    fn new_rejects_empty_and_blank() {
        assert!(Tag::new("").is_err());
        assert!(Tag::new("   ").is_err());
    }

    #[test]
    fn new_rejects_inner_whitespace_and_commas() {
        assert!(Tag::new("two words").is_err());
        assert!(Tag::new("a,b").is_err());
    }

    #[test]
    fn allows_punctuation() {
        assert_eq!(Tag::new("C++").unwrap().as_str(), "c++");
        assert_eq!(Tag::new("to-do").unwrap().as_str(), "to-do");
    }

    #[test]
    fn set_deduplicates_case_variants() {
        let set: BTreeSet<Tag> = ["Work", "work", "WORK", "home"]
            .iter()
            .map(|s| Tag::new(s).unwrap())
            .collect();
        let names: Vec<_> = set.iter().map(Tag::as_str).collect();
        assert_eq!(names, vec!["home", "work"]);
    }

    #[test]
    fn deserialize_normalizes() {
        let tag: Tag = serde_json::from_str("\"Shopping\"").unwrap();
        assert_eq!(tag.as_str(), "shopping");
    }

    #[test]
    fn deserialize_rejects_invalid() {
        assert!(serde_json::from_str::<Tag>("\"\"").is_err());
    }
}
