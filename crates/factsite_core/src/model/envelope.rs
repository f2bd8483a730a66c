//! Versioned envelope shared by baseline documents, override snapshots and
//! exports.
//!
//! # Wire shape
//! ```json
//! { "version": "1.0.0", "lastUpdated": "2025-05-24T00:00:00.000Z", "facts": [ ... ] }
//! ```
//! The collection field name depends on the kind (`facts`, `posts`,
//! `categories`). Decoding also accepts a generic `items` field.
//!
//! # Invariants
//! - Item order is preserved through encode and decode.
//! - Encoding is deterministic for equal envelopes: fixed field order,
//!   two-space indentation.

use serde::de::DeserializeOwned;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Schema version stamped on every envelope this crate writes.
pub const ENVELOPE_VERSION: &str = "1.0.0";

const GENERIC_COLLECTION_FIELD: &str = "items";

/// `{version, lastUpdated, items}` wrapper around one ordered collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope<T> {
    pub version: String,
    /// RFC 3339 timestamp text, kept verbatim from the source document.
    pub last_updated: String,
    pub items: Vec<T>,
}

impl<T> Envelope<T> {
    /// Wraps `items` with the current schema version.
    pub fn new(last_updated: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            version: ENVELOPE_VERSION.to_string(),
            last_updated: last_updated.into(),
            items,
        }
    }
}

/// Envelope encode/decode failure (the "parse failure" of the resolver).
#[derive(Debug)]
pub enum EnvelopeError {
    Json(serde_json::Error),
    /// Neither the kind-specific field nor `items` is present.
    MissingCollection(&'static str),
}

impl Display for EnvelopeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "malformed envelope: {err}"),
            Self::MissingCollection(field) => {
                write!(f, "envelope has no `{field}` collection")
            }
        }
    }
}

impl Error for EnvelopeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::MissingCollection(_) => None,
        }
    }
}

impl From<serde_json::Error> for EnvelopeError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Deserialize)]
struct RawEnvelope {
    version: String,
    #[serde(rename = "lastUpdated")]
    last_updated: String,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

struct EnvelopeOut<'a, T> {
    envelope: &'a Envelope<T>,
    collection_field: &'static str,
}

impl<T: Serialize> Serialize for EnvelopeOut<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Envelope", 3)?;
        state.serialize_field("version", &self.envelope.version)?;
        state.serialize_field("lastUpdated", &self.envelope.last_updated)?;
        state.serialize_field(self.collection_field, &self.envelope.items)?;
        state.end()
    }
}

/// Renders the canonical pretty-printed text of `envelope`.
pub fn encode_envelope<T: Serialize>(
    envelope: &Envelope<T>,
    collection_field: &'static str,
) -> Result<String, EnvelopeError> {
    let out = EnvelopeOut {
        envelope,
        collection_field,
    };
    Ok(serde_json::to_string_pretty(&out)?)
}

/// Parses envelope text whose items live under `collection_field`.
pub fn decode_envelope<T: DeserializeOwned>(
    text: &str,
    collection_field: &'static str,
) -> Result<Envelope<T>, EnvelopeError> {
    let mut raw: RawEnvelope = serde_json::from_str(text)?;
    let items = raw
        .rest
        .remove(collection_field)
        .or_else(|| raw.rest.remove(GENERIC_COLLECTION_FIELD))
        .ok_or(EnvelopeError::MissingCollection(collection_field))?;

    Ok(Envelope {
        version: raw.version,
        last_updated: raw.last_updated,
        items: serde_json::from_value(items)?,
    })
}

#[cfg(test)]
mod tests {
    use super::{decode_envelope, encode_envelope, Envelope, EnvelopeError};
    use crate::model::fact::Fact;

    #[test]
    fn encode_keeps_field_order_and_kind_field() {
        let envelope = Envelope::new("2025-01-01T00:00:00.000Z", vec![Fact::new("x", "Food")]);
        let text = encode_envelope(&envelope, "facts").unwrap();

        let version_at = text.find("\"version\"").unwrap();
        let updated_at = text.find("\"lastUpdated\"").unwrap();
        let facts_at = text.find("\"facts\"").unwrap();
        assert!(version_at < updated_at && updated_at < facts_at);
        assert!(text.contains("\n  \"version\": \"1.0.0\""));
    }

    #[test]
    fn decode_accepts_generic_items_field() {
        let text = r#"{"version":"1.0.0","lastUpdated":"t","items":[{"id":"1","text":"a","category":"Food"}]}"#;
        let envelope: Envelope<Fact> = decode_envelope(text, "facts").unwrap();
        assert_eq!(envelope.items.len(), 1);
        assert_eq!(envelope.items[0].id, "1");
    }

    #[test]
    fn decode_rejects_missing_collection_and_bad_json() {
        let missing = decode_envelope::<Fact>(r#"{"version":"1","lastUpdated":"t"}"#, "facts")
            .unwrap_err();
        assert!(matches!(missing, EnvelopeError::MissingCollection("facts")));

        let malformed = decode_envelope::<Fact>("{not json", "facts").unwrap_err();
        assert!(matches!(malformed, EnvelopeError::Json(_)));
    }
}
