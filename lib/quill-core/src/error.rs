//! Error types for quill.

use bytes::Bytes;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

// ============================================================================
// Validation Error Detail
// ============================================================================

/// One segment of a validation-error location.
///
/// Locations mix object keys and array indices, e.g. `["body", "tags", 0]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Loc {
    /// Object key, e.g. `"body"` or `"title"`.
    Field(String),
    /// Array index.
    Index(u64),
}

/// A single field-level validation failure from a 422 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Location of the failing field, outermost segment first.
    pub loc: Vec<Loc>,
    /// Human-readable message.
    pub msg: String,
    /// Machine-readable error type, e.g. `"value_error"`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Wire shape of a 422 response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HttpValidationError {
    /// Field-level failures, in the order the server reported them.
    #[serde(default)]
    pub detail: Vec<ValidationError>,
}

// ============================================================================
// Error Type
// ============================================================================

/// Main error type for quill operations.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// The call violates an operation contract (missing path parameter,
    /// unserializable body, invalid URL). Raised before any network I/O;
    /// always a caller bug.
    #[display("contract violation: {_0}")]
    Contract(#[error(not(source))] String),

    /// Transport-level failure (DNS, connection refused, reset).
    #[display("connection error: {_0}")]
    Network(#[error(not(source))] String),

    /// TLS handshake or certificate failure.
    #[display("TLS error: {_0}")]
    Tls(#[error(not(source))] String),

    /// Caller-supplied deadline exceeded.
    #[display("request deadline exceeded")]
    Timeout,

    /// Caller triggered the call's abort handle.
    #[display("request cancelled")]
    Cancelled,

    /// Response body could not be decoded into the requested shape.
    #[display("decode error at '{path}': {message}")]
    Decode {
        /// Path to the failing field (e.g. `"posts[0].slug"`); empty for
        /// syntax errors.
        path: String,
        /// Error message.
        message: String,
    },

    /// The request completed but the server reported failure (4xx/5xx).
    /// Produced only by explicit caller-side conversion, never implicitly.
    #[display("API error {status}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        #[error(not(source))]
        body: Bytes,
        /// Parsed validation detail, present when the status is 422 and the
        /// body matches the validation-error shape.
        #[error(not(source))]
        detail: Option<Vec<ValidationError>>,
    },
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a contract-violation error.
    #[must_use]
    pub fn contract(message: impl Into<String>) -> Self {
        Self::Contract(message.into())
    }

    /// Create a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
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

    /// Create an API error from a response status and body.
    ///
    /// When the status is 422 and the body parses as the validation-error
    /// shape, the structured detail list is attached.
    #[must_use]
    pub fn api(status: u16, body: Bytes) -> Self {
        let detail = (status == 422)
            .then(|| serde_json::from_slice::<HttpValidationError>(&body).ok())
            .flatten()
            .map(|e| e.detail);
        Self::Api {
            status,
            body,
            detail,
        }
    }

    /// Returns the HTTP status code if this is an API error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if this is a contract violation.
    #[must_use]
    pub const fn is_contract(&self) -> bool {
        matches!(self, Self::Contract(_))
    }

    /// Returns `true` if this is a transport failure (network or TLS).
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Tls(_))
    }

    /// Returns `true` if the caller's deadline was exceeded.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if the call was aborted by its caller.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns `true` if this is a 404 Not Found API error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if this is a client error (4xx).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Returns `true` if this is a server error (5xx).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..600).contains(&s))
    }

    /// Returns the raw response body if this is an API error.
    #[must_use]
    pub fn body(&self) -> Option<&Bytes> {
        match self {
            Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns the structured validation detail of a 422 API error.
    #[must_use]
    pub fn validation_detail(&self) -> Option<&[ValidationError]> {
        match self {
            Self::Api {
                detail: Some(detail),
                ..
            } => Some(detail),
            _ => None,
        }
    }
}

// Serialization failures are caller bugs: the value handed to the client
// could not be turned into a request.
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::contract(format!("JSON serialization failed: {err}"))
    }
}

impl From<serde_html_form::ser::Error> for Error {
    fn from(err: serde_html_form::ser::Error) -> Self {
        Self::contract(format!("query serialization failed: {err}"))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::contract(format!("invalid URL: {err}"))
    }
}
