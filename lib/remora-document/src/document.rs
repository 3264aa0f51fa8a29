//! Top-level JSON:API document.

use serde::{Deserialize, Serialize};

use crate::{ErrorObject, Links, Meta, Resource};

/// A top-level JSON:API document.
///
/// Per the JSON:API specification a document carries at least one of `data`,
/// `errors`, or `meta`; this type does not enforce that, leaving servers and
/// callers free to produce the shapes their endpoints define.
///
/// `data: null` and a missing `data` member are different documents: the
/// former decodes to `Some(PrimaryData::Null)`, the latter to `None`, and
/// both re-encode to what they came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The document's primary data.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::present"
    )]
    pub data: Option<PrimaryData>,

    /// Error objects, for error responses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorObject>,

    /// Non-standard meta-information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// Information about the server's JSON:API implementation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsonapi: Option<Jsonapi>,

    /// Links related to the primary data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,

    /// Resources related to the primary data (compound documents).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<Resource>,
}

impl Document {
    /// Create a document whose primary data is a single resource.
    #[must_use]
    pub fn from_resource(resource: Resource) -> Self {
        Self {
            data: Some(PrimaryData::Single(resource)),
            ..Self::default()
        }
    }

    /// Create a document whose primary data is a resource collection.
    #[must_use]
    pub fn from_resources(resources: Vec<Resource>) -> Self {
        Self {
            data: Some(PrimaryData::Many(resources)),
            ..Self::default()
        }
    }

    /// Create an error document.
    #[must_use]
    pub fn from_errors(errors: Vec<ErrorObject>) -> Self {
        Self {
            errors,
            ..Self::default()
        }
    }

    /// Returns `true` if the document carries error objects.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The primary resource, if the primary data is a single resource.
    #[must_use]
    pub fn resource(&self) -> Option<&Resource> {
        match &self.data {
            Some(PrimaryData::Single(resource)) => Some(resource),
            _ => None,
        }
    }

    /// The primary resources, if the primary data is a collection.
    #[must_use]
    pub fn resources(&self) -> Option<&[Resource]> {
        match &self.data {
            Some(PrimaryData::Many(resources)) => Some(resources),
            _ => None,
        }
    }
}

/// Primary data of a document: a single resource, a collection, or an
/// explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimaryData {
    /// A single resource object.
    Single(Resource),
    /// An array of resource objects.
    Many(Vec<Resource>),
    /// An explicit `data: null` (empty to-one).
    Null,
}

/// The top-level `jsonapi` object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Jsonapi {
    /// Highest JSON:API version supported by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Non-standard meta-information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}
