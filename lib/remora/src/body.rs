//! Document encode/decode glue.

use bytes::Bytes;
use remora_document::Document;

use crate::{Error, Result};

/// Serialize a document to indented JSON bytes.
///
/// Indentation is cosmetic; the JSON:API media type does not require it.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn encode_document(document: &Document) -> Result<Bytes> {
    serde_json::to_vec_pretty(document)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Deserialize JSON bytes into a document, with path-aware error messages.
///
/// Uses `serde_path_to_error` so a decode failure names the JSON path of the
/// offending member (e.g. `data.attributes`) rather than just a byte offset.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the bytes are not valid JSON or do not fit
/// the JSON:API document shape.
pub fn decode_document(bytes: &[u8]) -> Result<Document> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| Error::decode(e.path().to_string(), e.inner().to_string()))
}
