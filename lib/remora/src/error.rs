//! Error types for remora.

use derive_more::{Display, Error, From};

/// Main error type for remora operations.
///
/// Every error is terminal for the call that produced it: the client never
/// retries and never returns a partial [`crate::Response`]. A non-2xx status
/// with a decodable JSON:API body is *not* an error; only transport-level
/// failures and encode/decode failures are.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),

    /// Invalid request construction, before any network I/O.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// The request deadline elapsed before the exchange completed.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// The outbound document could not be encoded as JSON.
    #[display("document serialization error: {_0}")]
    #[from]
    Serialize(serde_json::Error),

    /// The response body was not a valid JSON:API document.
    #[display("document decode error at '{path}': {message}")]
    #[from(skip)]
    Decode {
        /// JSON path to the failing member (e.g. `data.attributes`).
        path: String,
        /// Error message.
        message: String,
    },
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create a decode error with path context.
    #[must_use]
    pub fn decode(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns `true` if this is a document decode error.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::Timeout;
        assert_eq!(err.to_string(), "request timeout");

        let err = Error::connection("failed to connect");
        assert_eq!(err.to_string(), "connection error: failed to connect");

        let err = Error::decode("data.attributes", "expected an object");
        assert_eq!(
            err.to_string(),
            "document decode error at 'data.attributes': expected an object"
        );

        let err = Error::invalid_request("bad header value");
        assert_eq!(err.to_string(), "invalid request: bad header value");
    }

    #[test]
    fn error_predicates() {
        assert!(Error::Timeout.is_timeout());
        assert!(!Error::Timeout.is_connection());

        assert!(Error::connection("refused").is_connection());
        assert!(!Error::connection("refused").is_timeout());

        assert!(Error::decode("", "not json").is_decode());
        assert!(!Error::tls("handshake").is_decode());
    }

    #[test]
    fn invalid_url_from_parse_error() {
        let err: Error = url::Url::parse("not a url").expect_err("invalid").into();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }
}
