//! Prelude module for convenient imports.
//!
//! ```ignore
//! use remora::prelude::*;
//! ```

pub use crate::{
    ClientConfig, Document, Error, HyperTransport, JsonApiClient, MEDIA_TYPE, RawResponse,
    Response, Result, StatusCode, Transport, decode_document, encode_document,
};
pub use remora_document::{ErrorObject, Identifier, Link, PrimaryData, Relationship, Resource};
