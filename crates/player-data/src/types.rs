//! Wire types for the player document served by the JSON document store.
//!
//! The store wraps every document in an envelope:
//!
//! ```text
//! {
//!   "record":   { "playerName", "level", "health", "position": {x,y,z}, "inventory": [...] },
//!   "metadata": { "id", "private", "createdAt", "name" }
//! }
//! ```
//!
//! Rust field names follow Rust conventions; the wire names are pinned with
//! serde attributes so both directions stay byte-compatible with the store.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{FetchError, Result};

/// Player state as stored in the bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "playerName")]
    pub name: String,
    pub level: u32,
    /// Expected in `0..=100`; the store does not enforce it.
    pub health: f32,
    pub position: Position,
    pub inventory: Vec<InventoryItem>,
}

/// World-space position of the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Single inventory entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub item_name: String,
    pub quantity: u32,
    pub weight: f32,
}

impl InventoryItem {
    pub fn new(item_name: impl Into<String>, quantity: u32, weight: f32) -> Self {
        Self {
            item_name: item_name.into(),
            quantity,
            weight,
        }
    }
}

/// Bin metadata attached by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub id: String,
    /// Wire name is `private`.
    #[serde(rename = "private")]
    pub is_private: bool,
    /// ISO-8601 timestamp, kept verbatim. Formatting happens at display time.
    pub created_at: String,
    pub name: String,
}

/// Decoded response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDocument {
    pub record: PlayerRecord,
    pub metadata: Metadata,
}

/// Envelope as it arrives on the wire.
///
/// `record` and `metadata` must be present but may be `null`; a `null` is an
/// empty result rather than a malformed document.
#[derive(Deserialize)]
struct RawDocument {
    #[serde(deserialize_with = "present_or_null")]
    record: Option<PlayerRecord>,
    #[serde(deserialize_with = "present_or_null")]
    metadata: Option<Metadata>,
}

// Using `deserialize_with` keeps serde from treating a missing key as `None`.
fn present_or_null<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

impl PlayerDocument {
    /// Decode a response body.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Parse`] for malformed JSON or missing/mistyped fields
    /// - [`FetchError::EmptyResult`] when the body, `record`, or `metadata` is `null`
    pub fn from_json(body: &str) -> Result<Self> {
        let raw: Option<RawDocument> = serde_json::from_str(body)?;

        match raw {
            Some(RawDocument {
                record: Some(record),
                metadata: Some(metadata),
            }) => Ok(Self { record, metadata }),
            _ => Err(FetchError::EmptyResult),
        }
    }

    /// Encode using the wire schema.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
