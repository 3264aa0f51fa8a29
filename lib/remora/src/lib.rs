//! Async JSON:API HTTP client.
//!
//! `remora` issues GET and POST requests against a JSON:API server, sets the
//! `application/vnd.api+json` media-type headers, applies a per-request
//! deadline (5 seconds by default), and decodes response bodies into the
//! [`Document`] model from [`remora_document`].
//!
//! Each call is one atomic HTTP round trip: no retries, no pagination, no
//! streaming. Non-2xx statuses are not errors — a 404 with a JSON:API error
//! document comes back as a normal [`Response`] for the caller to inspect.
//!
//! # Example
//!
//! ```no_run
//! use remora::{JsonApiClient, document::Resource, Document};
//! use serde_json::json;
//!
//! # async fn run() -> remora::Result<()> {
//! let client = JsonApiClient::parse("https://api.example.com")?;
//!
//! // GET /articles?sort=-created
//! let listing = client.get("/articles", &[("sort", "-created")]).await?;
//! println!("status: {}", listing.status());
//!
//! // POST a new resource
//! let draft = Document::from_resource(
//!     Resource::without_id("articles").attribute("title", json!("Hello")),
//! );
//! let created = client.post("/articles", &[], &draft).await?;
//! println!("created: {:?}", created.document().resource());
//! # Ok(())
//! # }
//! ```

mod body;
mod client;
mod config;
mod connector;
mod error;
pub mod prelude;
mod response;
mod transport;

pub use body::{decode_document, encode_document};
pub use client::{JsonApiClient, JsonApiClientBuilder};
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_TIMEOUT};
pub use connector::https_connector;
pub use error::{Error, Result};
pub use response::Response;
pub use transport::{HyperTransport, RawResponse, Transport};

// Re-export the document collaborator
pub use remora_document as document;
pub use remora_document::{Document, MEDIA_TYPE};

// Re-export http types for status codes and headers
pub use http::{HeaderMap, StatusCode, header};
