//! Relationship objects: linkage between resources.

use serde::{Deserialize, Serialize};

use crate::{Identifier, Links, Meta};

/// A relationship object, holding links, resource linkage, or meta.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// Relationship links (`self`, `related`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,

    /// Resource linkage. `data: null` decodes to `Some(IdentifierData::Null)`
    /// and is kept distinct from an absent `data` member.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::present"
    )]
    pub data: Option<IdentifierData>,

    /// Non-standard meta-information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl Relationship {
    /// A to-one relationship pointing at a single resource.
    #[must_use]
    pub fn to_one(identifier: Identifier) -> Self {
        Self {
            data: Some(IdentifierData::Single(identifier)),
            ..Self::default()
        }
    }

    /// A to-many relationship pointing at a collection of resources.
    #[must_use]
    pub fn to_many(identifiers: Vec<Identifier>) -> Self {
        Self {
            data: Some(IdentifierData::Many(identifiers)),
            ..Self::default()
        }
    }

    /// An empty to-one relationship (`data: null`).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            data: Some(IdentifierData::Null),
            ..Self::default()
        }
    }
}

/// Resource linkage: one identifier, many, or an explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdentifierData {
    /// Linkage to a single resource.
    Single(Identifier),
    /// Linkage to a collection of resources.
    Many(Vec<Identifier>),
    /// An explicit `data: null` (empty to-one).
    Null,
}
