//! Body and query serialization utilities.

use bytes::Bytes;

use crate::Result;

/// Declared content type for request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// JSON content type (`application/json`).
    Json,
    /// Form URL-encoded content type (`application/x-www-form-urlencoded`).
    FormUrlEncoded,
    /// Binary passthrough (`application/octet-stream`).
    OctetStream,
}

impl ContentType {
    /// Get the MIME type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::FormUrlEncoded => "application/x-www-form-urlencoded",
            Self::OctetStream => "application/octet-stream",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serialize a value to JSON bytes.
///
/// Explicit `null` fields survive serialization; only fields the value's
/// serde attributes skip are omitted. This is what lets partial updates
/// distinguish "clear this field" from "leave it unchanged".
///
/// # Errors
///
/// Returns a contract error if serialization fails.
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Serialize a value to form URL-encoded bytes.
///
/// Uses `serde_html_form`, which encodes `Vec<T>` as repeated fields
/// (`tags=a&tags=b&tags=c`).
///
/// # Errors
///
/// Returns a contract error if serialization fails.
pub fn to_form<T: serde::Serialize>(value: &T) -> Result<Bytes> {
    serde_html_form::to_string(value)
        .map(|s| Bytes::from(s.into_bytes()))
        .map_err(Into::into)
}

/// Serialize a value to a query string.
///
/// Encoding rules:
/// - `Option` fields with `skip_serializing_if = "Option::is_none"` are
///   omitted entirely when absent.
/// - `Vec<T>` repeats the key per element.
/// - Output order follows struct declaration order, so a given input always
///   produces the same string.
///
/// # Errors
///
/// Returns a contract error if serialization fails.
///
/// # Example
///
/// ```
/// use quill_core::to_query_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Search {
///     q: String,
///     #[serde(skip_serializing_if = "Option::is_none")]
///     page: Option<u32>,
/// }
///
/// let search = Search { q: "rust".to_string(), page: Some(1) };
/// let query = to_query_string(&search).expect("serialize");
/// assert_eq!(query, "q=rust&page=1");
/// ```
pub fn to_query_string<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_html_form::to_string(value).map_err(Into::into)
}

/// Deserialize JSON bytes with path-aware error messages.
///
/// Failures carry the path to the offending field (e.g. `posts[0].slug`)
/// via `serde_path_to_error`.
///
/// # Errors
///
/// Returns [`crate::Error::Decode`] if the bytes do not match `T`.
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| crate::Error::decode(e.path().to_string(), e.inner().to_string()))
}
