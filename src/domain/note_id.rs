//! Sequential integer note identifier with serde support.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A positive integer identifying a note.
///
/// Ids are assigned sequentially by the [`Store`](super::Store): one greater
/// than the highest id ever assigned, starting at `1`. Zero is never a valid id.
///
/// # Examples
///
/// ```
/// use notekeeper::domain::NoteId;
///
/// let id: NoteId = "7".parse().unwrap();
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.next().map(NoteId::get), Some(8));
/// assert!("0".parse::<NoteId>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteId(u64);

/// Error returned when parsing an invalid note id.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
    reason: &'static str,
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl NoteId {
    /// The id given to the first note of an empty store.
    pub const FIRST: NoteId = NoteId(1);

    /// Creates a NoteId from a raw integer.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteIdError` if `value` is zero.
    pub fn new(value: u64) -> Result<Self, ParseNoteIdError> {
        if value == 0 {
            return Err(ParseNoteIdError {
                value: value.to_string(),
                reason: "ids start at 1",
            });
        }
        Ok(Self(value))
    }

    /// Returns the raw integer value.
    pub fn get(self) -> u64 {
        self.0
    }

    /// Returns the id that follows this one, or `None` past `u64::MAX`.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId({})", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u64 = s.trim().parse().map_err(|_| ParseNoteIdError {
            value: s.to_string(),
            reason: "expected a positive integer",
        })?;
        Self::new(value)
    }
}

impl Serialize for NoteId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u64::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
