//! JSON encoding for cache files.
//!
//! Files are pretty-printed so they can be inspected and hand-edited.
//! Decoding tolerates missing properties: every record type stored in the
//! cache implements [`CacheRecord`], which requires `Default`, and is declared
//! with `#[serde(default)]` so absent fields fall back to their defaults.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Marker for types that may be stored in a cache file
pub trait CacheRecord: Serialize + DeserializeOwned + Default {}

/// Encode a value as pretty-printed JSON
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Decode JSON text into a value
pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(text)
}
