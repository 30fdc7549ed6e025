// SPDX-License-Identifier: MPL-2.0
//! Chunk payloads produced by the summarization backend.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier of a chunk as sent by the backend.
///
/// Non-negative integers and strings keep their shape. Any other JSON value
/// (floats, booleans, `null`) is kept as its JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ChunkId {
    Number(u64),
    Text(String),
}

impl Default for ChunkId {
    fn default() -> Self {
        ChunkId::Text(String::new())
    }
}

impl<'de> Deserialize<'de> for ChunkId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => match n.as_u64() {
                Some(n) => ChunkId::Number(n),
                None => ChunkId::Text(n.to_string()),
            },
            Value::String(s) => ChunkId::Text(s),
            other => ChunkId::Text(other.to_string()),
        })
    }
}

/// Decodes an explicit `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkId::Number(n) => write!(f, "{n}"),
            ChunkId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ChunkId {
    fn from(value: u64) -> Self {
        ChunkId::Number(value)
    }
}

impl From<&str> for ChunkId {
    fn from(value: &str) -> Self {
        ChunkId::Text(value.to_string())
    }
}

/// One unit of original text paired with its summary.
///
/// Immutable once received: no field is validated or rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    #[serde(default)]
    pub id: ChunkId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
}

impl Chunk {
    pub fn new(
        id: impl Into<ChunkId>,
        original_text: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            original_text: original_text.into(),
            summary: summary.into(),
        }
    }
}

/// Response envelope returned by the summarization endpoint.
///
/// A missing or `null` `chunks` field decodes as an empty list, which the
/// results component treats the same way as an explicitly empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub chunks: Vec<Chunk>,
}

impl ResponseData {
    pub fn new(chunks: Vec<Chunk>) -> Self {
        Self { chunks }
    }

    /// Whether the response carries at least one chunk.
    #[must_use]
    pub fn has_chunks(&self) -> bool {
        !self.chunks.is_empty()
    }
}
