//! Transport abstraction over a single HTTP round trip.
//!
//! [`Transport`] is the injection seam for the client: the production
//! implementation is [`HyperTransport`]; tests can substitute a double that
//! returns canned [`RawResponse`] values without any network.

use std::future::Future;

use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use http_body_util::{BodyExt, Full};
use hyper_rustls::HttpsConnector;
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use tracing::trace;

use crate::{Error, Result, connector::https_connector};

/// A fully-read HTTP response produced by a [`Transport`].
///
/// The body has been drained and the underlying stream released by the time
/// this value exists; trailers, when the transport produced none, are empty.
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body bytes.
    pub body: Bytes,
    /// Trailer headers, arriving after the body.
    pub trailers: HeaderMap,
}

/// A single HTTP request/response exchange.
///
/// Implementations must fully consume the response body before returning, on
/// both success and failure paths, so no connection or descriptor leaks past
/// the call.
pub trait Transport: Send + Sync {
    /// Execute the request and return the fully-read response.
    ///
    /// # Errors
    ///
    /// Returns an error on network, TLS, or body-read failure.
    fn send(
        &self,
        request: http::Request<Full<Bytes>>,
    ) -> impl Future<Output = Result<RawResponse>> + Send;
}

/// Production transport using hyper-util with a rustls connector.
///
/// Connection pooling is whatever the hyper client provides by default; the
/// transport adds nothing on top.
#[derive(Clone)]
pub struct HyperTransport {
    inner: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
}

impl std::fmt::Debug for HyperTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperTransport").finish_non_exhaustive()
    }
}

impl HyperTransport {
    /// Create a new transport with its own connection pool.
    #[must_use]
    pub fn new() -> Self {
        let inner = Client::builder(TokioExecutor::new()).build(https_connector());
        Self { inner }
    }
}

impl Default for HyperTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HyperTransport {
    async fn send(&self, request: http::Request<Full<Bytes>>) -> Result<RawResponse> {
        let response = self
            .inner
            .request(request)
            .await
            .map_err(map_hyper_error)?;

        let (parts, body) = response.into_parts();
        let collected = body
            .collect()
            .await
            .map_err(|e| Error::connection(e.to_string()))?;
        let trailers = collected.trailers().cloned().unwrap_or_default();
        let body = collected.to_bytes();

        trace!(
            status = parts.status.as_u16(),
            body_len = body.len(),
            "response body read"
        );

        Ok(RawResponse {
            status: parts.status,
            headers: parts.headers,
            body,
            trailers,
        })
    }
}

#[allow(clippy::needless_pass_by_value)]
fn map_hyper_error(err: hyper_util::client::legacy::Error) -> Error {
    let msg = err.to_string();

    if err.is_connect() {
        return Error::connection(msg);
    }

    if msg.contains("ssl") || msg.contains("tls") || msg.contains("certificate") {
        return Error::tls(msg);
    }

    Error::connection(msg)
}
