//! Links objects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Meta;

/// A links object: link members keyed by name (`self`, `related`,
/// pagination links, ...).
pub type Links = BTreeMap<String, Link>;

/// A single link: either a bare URL string or an object with `href` and
/// optional `meta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Link {
    /// A link represented as a URL string.
    Href(String),
    /// A link object with an `href` and optional meta.
    Object {
        /// The link's URL.
        href: String,
        /// Non-standard meta-information about the link.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        meta: Option<Meta>,
    },
}

impl Link {
    /// The link's URL, regardless of representation.
    #[must_use]
    pub fn href(&self) -> &str {
        match self {
            Self::Href(href) | Self::Object { href, .. } => href,
        }
    }
}

impl From<&str> for Link {
    fn from(href: &str) -> Self {
        Self::Href(href.to_owned())
    }
}

impl From<String> for Link {
    fn from(href: String) -> Self {
        Self::Href(href)
    }
}
