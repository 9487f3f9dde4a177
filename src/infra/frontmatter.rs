//! YAML frontmatter codec for the one-file-per-note backend.

use crate::domain::{Tag, timestamp};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Metadata block at the top of a note file.
///
/// The id is not part of the block; it is encoded in the filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontmatter {
    pub title: String,
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<Tag>,
}

/// Errors during frontmatter parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing opening frontmatter delimiter '---'")]
    MissingOpeningDelimiter,

    #[error("missing closing frontmatter delimiter '---'")]
    MissingClosingDelimiter,

    #[error("invalid YAML in frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

/// Parses a note file into its frontmatter and body.
///
/// # Format
/// ```text
/// ---
/// title: Shopping List
/// created_at: 2024-01-15 10:30:00
/// tags:
/// - home
/// ---
/// milk, eggs
/// ```
///
/// Trailing whitespace of the body is dropped.
///
/// # Errors
///
/// Returns `ParseError` if the delimiters are missing or the YAML between
/// them does not describe a note.
pub fn parse(content: &str) -> Result<(Frontmatter, String), ParseError> {
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);

    let after_opening = if content.starts_with("---\r\n") {
        5
    } else if content.starts_with("---\n") {
        4
    } else if content == "---" {
        return Err(ParseError::MissingClosingDelimiter);
    } else {
        return Err(ParseError::MissingOpeningDelimiter);
    };

    let yaml_and_rest = &content[after_opening..];
    let closing_pos = find_closing_delimiter(yaml_and_rest)?;
    let yaml = &yaml_and_rest[..closing_pos];

    let after_closing = &yaml_and_rest[closing_pos..];
    let body = if let Some(rest) = after_closing.strip_prefix("---\r\n") {
        rest
    } else if let Some(rest) = after_closing.strip_prefix("---\n") {
        rest
    } else {
        ""
    };

    let frontmatter: Frontmatter = serde_yaml::from_str(yaml)?;
    Ok((frontmatter, body.trim_end().to_string()))
}

/// Serializes frontmatter and body into note file text.
pub fn serialize(frontmatter: &Frontmatter, body: &str) -> Result<String, serde_yaml::Error> {
    let yaml = serde_yaml::to_string(frontmatter)?;
    Ok(format!("---\n{}---\n{}\n", yaml, body))
}

/// Finds the position of the closing `---` delimiter.
///
/// The closing delimiter must start a line and be followed by a newline or EOF.
fn find_closing_delimiter(content: &str) -> Result<usize, ParseError> {
    let mut pos = 0;
    let bytes = content.as_bytes();

    while pos < bytes.len() {
        if content[pos..].starts_with("---") {
            let after = pos + 3;
            if after >= bytes.len()
                || bytes[after] == b'\n'
                || (bytes[after] == b'\r' && bytes.get(after + 1) == Some(&b'\n'))
            {
                return Ok(pos);
            }
        }

        match content[pos..].find('\n') {
            Some(newline_offset) => pos += newline_offset + 1,
            None => break,
        }
    }

    Err(ParseError::MissingClosingDelimiter)
}
