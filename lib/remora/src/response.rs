//! HTTP response handling.

use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use remora_document::Document;

/// The outcome of one successful request/response exchange.
///
/// "Successful" means the exchange completed and the body decoded; the
/// status code may still be anything the server returned. A 404 carrying a
/// JSON:API error document is a `Response`, not an error.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    trailers: HeaderMap,
    document: Document,
    raw: Option<Bytes>,
}

impl Response {
    /// Creates a new response.
    #[must_use]
    pub fn new(
        status: StatusCode,
        headers: HeaderMap,
        trailers: HeaderMap,
        document: Document,
        raw: Option<Bytes>,
    ) -> Self {
        Self {
            status,
            headers,
            trailers,
            document,
            raw,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// First value of a header, when present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Trailer headers. Empty when the transport produced none.
    #[must_use]
    pub const fn trailers(&self) -> &HeaderMap {
        &self.trailers
    }

    /// The decoded JSON:API document.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Consume into the decoded document.
    #[must_use]
    pub fn into_document(self) -> Document {
        self.document
    }

    /// The raw, undecoded body bytes.
    ///
    /// `None` unless the client was configured with `keep_raw_body`.
    #[must_use]
    pub const fn raw(&self) -> Option<&Bytes> {
        self.raw.as_ref()
    }

    /// Status is 2xx.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Status is 4xx.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status.is_client_error()
    }

    /// Status is 5xx.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }
}
