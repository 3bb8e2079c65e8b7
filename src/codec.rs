//! Text codec for the structured recipe fields.
//!
//! Ingredients and instructions live in the store as JSON array text. These
//! two functions are the only place that conversion happens: the store layer
//! encodes on write, readers of a stored row decode before structural use.

use serde::{de::DeserializeOwned, Serialize};

/// Encode a sequence of records into its stored text form
pub fn encode<T: Serialize>(items: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string(items)
}

/// Decode stored text back into a sequence of records
pub fn decode<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, serde_json::Error> {
    serde_json::from_str(text)
}
