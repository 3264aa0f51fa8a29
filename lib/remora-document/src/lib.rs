//! JSON:API document model.
//!
//! This crate owns the document schema used by the `remora` client:
//! - [`Document`] - the top-level payload (`data`, `errors`, `meta`, `links`, `included`)
//! - [`Resource`] - a resource object identified by `type` + `id`
//! - [`Relationship`] and [`Identifier`] - linkage between resources
//! - [`Link`] and [`Links`] - links objects
//! - [`ErrorObject`] - error objects
//!
//! All types serialize to and deserialize from JSON:API-conformant JSON via
//! serde. Absent members are omitted on encode, so `decode(encode(d))`
//! preserves every semantically significant field of `d`. An explicit
//! `"data": null` is kept distinct from an absent `data` member (see
//! [`PrimaryData::Null`]).
//!
//! # Example
//!
//! ```
//! use remora_document::{Document, Resource};
//! use serde_json::json;
//!
//! let article = Resource::new("articles", "1")
//!     .attribute("title", json!("JSON:API paints my bikeshed!"));
//! let document = Document::from_resource(article);
//!
//! let encoded = serde_json::to_string(&document).expect("serialize");
//! let decoded: Document = serde_json::from_str(&encoded).expect("deserialize");
//! assert_eq!(decoded, document);
//! ```

mod document;
mod error_object;
mod link;
mod relationship;
mod resource;

pub use document::{Document, Jsonapi, PrimaryData};
pub use error_object::{ErrorObject, ErrorSource};
pub use link::{Link, Links};
pub use relationship::{IdentifierData, Relationship};
pub use resource::{Identifier, Resource};

/// The JSON:API media type, used for `Content-Type` and `Accept` headers.
pub const MEDIA_TYPE: &str = "application/vnd.api+json";

/// A free-form `meta` object: arbitrary JSON members.
pub type Meta = serde_json::Map<String, serde_json::Value>;

/// Deserialize a present member into `Some`, letting the inner type handle
/// an explicit `null`.
///
/// Used on `Option` fields whose inner enum has a `Null` variant: serde only
/// calls this when the member is present, so an absent member stays `None`
/// (via `#[serde(default)]`) while `"member": null` becomes `Some(Null)`.
pub(crate) fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
