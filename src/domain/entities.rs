//! Domain entities mirrored from the remote posts collection.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::domain::error::DomainError;

/// Listing snippets show at most this many characters of a post body.
pub const SNIPPET_CHARS: usize = 25;

/// Integer identifier of a post.
///
/// Some hosted JSON servers hand identifiers back as strings, so both
/// `3` and `"3"` are accepted on input. Output is always a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PostId(u64);

impl PostId {
    pub const FIRST: PostId = PostId(1);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identifier following this one.
    pub fn next(self) -> Result<Self, DomainError> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or_else(|| DomainError::invariant("post identifier space exhausted"))
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| DomainError::validation(format!("`{value}` is not a valid post id")))
    }
}

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(value) => Ok(Self(value)),
            RawId::Text(text) => text.parse().map_err(de::Error::custom),
        }
    }
}

/// A single blog post. Field order matches the creation payload
/// `{id, title, datetime, body}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub datetime: String,
    pub body: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Post {
    /// Case-insensitive substring match against title or body.
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.body.to_lowercase().contains(needle) || self.title.to_lowercase().contains(needle)
    }

    /// Body shortened for listings.
    pub fn snippet(&self) -> String {
        if self.body.chars().count() <= SNIPPET_CHARS {
            return self.body.clone();
        }
        let mut short: String = self.body.chars().take(SNIPPET_CHARS).collect();
        short.push_str("...");
        short
    }
}
