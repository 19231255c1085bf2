//! HTTP response descriptors.
//!
//! A [`Response`] carries status, headers, and the raw body bytes. The body
//! is never parsed eagerly: callers pick a decoder ([`Response::json`],
//! [`Response::text`], [`Response::bytes`]) once they have branched on the
//! status. The client never throws on a 4xx/5xx by itself —
//! [`Response::error_for_status`] is the explicit opt-in conversion.

use std::collections::HashMap;

use bytes::Bytes;

use crate::{Error, Result};

/// HTTP response with status, headers, and an undecoded body.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: HashMap<String, String>,
    body: Bytes,
}

impl Response {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Status is 4xx.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Status is 5xx.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }

    /// Status is 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Raw body bytes.
    #[must_use]
    pub const fn bytes(&self) -> &Bytes {
        &self.body
    }

    /// Consume into the raw body.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.body
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] with path context if the body does not
    /// match `T`.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        crate::from_json(&self.body)
    }

    /// Decode the body as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the body is not valid UTF-8.
    pub fn text(&self) -> Result<String> {
        String::from_utf8(self.body.to_vec())
            .map_err(|e| Error::decode(String::new(), e.to_string()))
    }

    /// Convert a non-2xx response into [`Error::Api`].
    ///
    /// For 422 responses the validation detail list is parsed and attached.
    /// 2xx responses pass through unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] when the status is outside 200..300.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::api(self.status, self.body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::let_assert;

    fn response(status: u16, body: &'static [u8]) -> Response {
        Response::new(status, HashMap::new(), Bytes::from_static(body))
    }

    #[test]
    fn response_basic() {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());

        let response = Response::new(200, headers, Bytes::from_static(br#"{"status":"ok"}"#));

        assert_eq!(response.status(), 200);
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert!(response.is_success());
        assert!(!response.is_client_error());
        assert!(!response.is_server_error());
    }

    #[test]
    fn response_status_checks() {
        assert!(response(404, b"").is_client_error());
        assert!(response(404, b"").is_not_found());
        assert!(response(500, b"").is_server_error());
        assert!(!response(200, b"").is_not_found());
    }

    #[test]
    fn response_json_is_lazy_and_repeatable() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Health {
            status: String,
        }

        let response = response(200, br#"{"status":"ok"}"#);

        let first: Health = response.json().expect("decode");
        let second: Health = response.json().expect("decode");
        assert_eq!(first, second);
        assert_eq!(first.status, "ok");
    }

    #[test]
    fn response_json_mismatch_is_decode_error() {
        #[derive(Debug, serde::Deserialize)]
        struct Health {
            #[allow(dead_code)]
            status: String,
        }

        let err = response(200, b"<html>")
            .json::<Health>()
            .expect_err("should fail");
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn response_text() {
        let response = response(200, b"plain body");
        assert_eq!(response.text().expect("text"), "plain body");
    }

    #[test]
    fn error_for_status_passes_success_through() {
        let response = response(201, br#"{"id":1}"#).error_for_status().expect("ok");
        assert_eq!(response.status(), 201);
    }

    #[test]
    fn error_for_status_converts_failures() {
        let err = response(
            422,
            br#"{"detail":[{"loc":["body","title"],"msg":"too short","type":"value_error"}]}"#,
        )
        .error_for_status()
        .expect_err("should fail");

        assert_eq!(err.status(), Some(422));
        let_assert!(Some(detail) = err.validation_detail());
        assert_eq!(detail.len(), 1);
    }

    #[test]
    fn error_for_status_opaque_failure() {
        let err = response(503, b"unavailable")
            .error_for_status()
            .expect_err("should fail");
        assert_eq!(err.status(), Some(503));
        assert!(err.validation_detail().is_none());
    }
}
