//! JSON:API client implementation.

use std::time::Instant;

use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_TYPE};
use http_body_util::Full;
use remora_document::{Document, MEDIA_TYPE};
use tracing::{debug, warn};
use url::Url;

use crate::{
    ClientConfig, Error, Response, Result,
    body::{decode_document, encode_document},
    config::ClientConfigBuilder,
    transport::{HyperTransport, Transport},
};

/// Client for a JSON:API server.
///
/// Holds a base URL whose scheme and host every request reuses; each call
/// derives its own URL by *replacing* the base's path and query with the
/// caller-supplied values. The client is immutable after construction and
/// safe to share across concurrent callers.
///
/// # Example
///
/// ```no_run
/// use remora::JsonApiClient;
///
/// # async fn run() -> remora::Result<()> {
/// let client = JsonApiClient::parse("https://api.example.com")?;
/// let response = client.get("/articles", &[("page[number]", "2")]).await?;
/// for article in response.document().resources().unwrap_or_default() {
///     println!("{}", article.kind);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct JsonApiClient<T = HyperTransport> {
    transport: T,
    base_url: Url,
    config: ClientConfig,
}

impl<T: Clone> Clone for JsonApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            base_url: self.base_url.clone(),
            config: self.config.clone(),
        }
    }
}

impl JsonApiClient<HyperTransport> {
    /// Create a client with default configuration.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self::builder(base_url).build()
    }

    /// Create a client with default configuration from a URL string.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse(base_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self::new(Url::parse(base_url.as_ref())?))
    }

    /// Create a new client builder.
    #[must_use]
    pub fn builder(base_url: Url) -> JsonApiClientBuilder {
        JsonApiClientBuilder {
            base_url,
            config: ClientConfigBuilder::default(),
        }
    }
}

impl<T: Transport> JsonApiClient<T> {
    /// Create a client over a custom transport, with default configuration.
    #[must_use]
    pub fn with_transport(transport: T, base_url: Url) -> Self {
        Self {
            transport,
            base_url,
            config: ClientConfig::default(),
        }
    }

    /// The client's base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue a GET request and decode the response as a JSON:API document.
    ///
    /// `path` replaces the base URL's path entirely; `query` replaces its
    /// query string, URL-encoded pair by pair in the order given (repeat a
    /// key for multi-valued parameters).
    ///
    /// # Errors
    ///
    /// Returns an error on malformed request construction, transport
    /// failure, timeout, or an undecodable response body. A non-2xx status
    /// with a decodable body is returned as `Ok`.
    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Response> {
        let url = self.request_url(path, query);
        let request = http::Request::builder()
            .method(http::Method::GET)
            .uri(url.as_str())
            .header(ACCEPT, MEDIA_TYPE)
            .body(Full::default())
            .map_err(|e| Error::invalid_request(e.to_string()))?;

        self.execute(request).await
    }

    /// Issue a POST request carrying `document` and decode the response as a
    /// JSON:API document.
    ///
    /// The document is serialized as indented JSON. URL construction and the
    /// success/failure contract match [`Self::get`].
    ///
    /// # Errors
    ///
    /// Returns an error if the outbound document cannot be serialized, plus
    /// every failure case of [`Self::get`].
    pub async fn post(
        &self,
        path: &str,
        query: &[(&str, &str)],
        document: &Document,
    ) -> Result<Response> {
        let body = encode_document(document)?;
        let url = self.request_url(path, query);
        let request = http::Request::builder()
            .method(http::Method::POST)
            .uri(url.as_str())
            .header(CONTENT_TYPE, MEDIA_TYPE)
            .header(ACCEPT, MEDIA_TYPE)
            .body(Full::new(body))
            .map_err(|e| Error::invalid_request(e.to_string()))?;

        self.execute(request).await
    }

    /// Derive the per-request URL: the base's scheme and host with path and
    /// query fully replaced.
    fn request_url(&self, path: &str, query: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url.set_query(None);
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }
        url
    }

    /// Run one exchange under the configured deadline and decode the body.
    async fn execute(&self, request: http::Request<Full<Bytes>>) -> Result<Response> {
        let method = request.method().clone();
        let url = request.uri().to_string();
        debug!(%method, %url, "sending request");

        let start = Instant::now();
        let sent = tokio::time::timeout(self.config.timeout, self.transport.send(request)).await;
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        let raw = match sent {
            Ok(Ok(raw)) => raw,
            Ok(Err(err)) => {
                warn!(error = %err, elapsed_ms, "request failed");
                return Err(err);
            }
            Err(_) => {
                warn!(elapsed_ms, "request timed out");
                return Err(Error::Timeout);
            }
        };
        debug!(status = raw.status.as_u16(), elapsed_ms, "request completed");

        let document = decode_document(&raw.body)?;
        let raw_body = self.config.keep_raw_body.then(|| raw.body.clone());

        Ok(Response::new(
            raw.status,
            raw.headers,
            raw.trailers,
            document,
            raw_body,
        ))
    }
}

/// Builder for [`JsonApiClient`].
#[derive(Debug)]
pub struct JsonApiClientBuilder {
    base_url: Url,
    config: ClientConfigBuilder,
}

impl JsonApiClientBuilder {
    /// Set the per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Retain raw response bodies on the [`Response`].
    #[must_use]
    pub fn keep_raw_body(mut self, keep: bool) -> Self {
        self.config = self.config.keep_raw_body(keep);
        self
    }

    /// Build the client with the production hyper transport.
    #[must_use]
    pub fn build(self) -> JsonApiClient<HyperTransport> {
        self.build_with_transport(HyperTransport::new())
    }

    /// Build the client over a custom transport.
    #[must_use]
    pub fn build_with_transport<T: Transport>(self, transport: T) -> JsonApiClient<T> {
        JsonApiClient {
            transport,
            base_url: self.base_url,
            config: self.config.build(),
        }
    }
}
