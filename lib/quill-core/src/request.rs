//! HTTP request descriptors.
//!
//! A [`Request`] is the resolved, concrete form of one invocation: final
//! URL, method, merged headers, and serialized body. Built fresh per call
//! via [`Request::builder`], never reused.
//!
//! # Example
//!
//! ```
//! use quill_core::{Method, Request};
//!
//! let request = Request::builder(Method::Get, "https://api.example.com/posts".parse().unwrap())
//!     .header("Accept", "application/json")
//!     .query("page", "1")
//!     .build();
//! ```

use std::collections::HashMap;

use bytes::Bytes;

use crate::{Form, Method};

/// An HTTP request with method, URL, headers, and optional body.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: url::Url,
    headers: HashMap<String, String>,
    body: Option<Bytes>,
}

impl Request {
    /// Creates a new [`RequestBuilder`].
    #[must_use]
    pub fn builder(method: Method, url: url::Url) -> RequestBuilder {
        RequestBuilder::new(method, url)
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Request URL.
    #[must_use]
    pub fn url(&self) -> &url::Url {
        &self.url
    }

    /// Request headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Mutable access to headers.
    #[must_use]
    pub fn headers_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Request body.
    #[must_use]
    pub const fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Consume into (method, url, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (Method, url::Url, HashMap<String, String>, Option<Bytes>) {
        (self.method, self.url, self.headers, self.body)
    }
}

/// Builder for [`Request`] instances.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: url::Url,
    headers: HashMap<String, String>,
    body: Option<Bytes>,
}

impl RequestBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(method: Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Sets a header, replacing any previous value for the name.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets multiple headers. Later entries win per name.
    #[must_use]
    pub fn headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Appends a query parameter to the URL.
    #[must_use]
    pub fn query(mut self, name: &str, value: &str) -> Self {
        self.url.query_pairs_mut().append_pair(name, value);
        self
    }

    /// Appends multiple query parameters to the URL, preserving order.
    #[must_use]
    pub fn query_pairs(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        {
            let mut query = self.url.query_pairs_mut();
            for (name, value) in pairs {
                query.append_pair(&name, &value);
            }
        }
        self
    }

    /// Sets a raw body without touching headers.
    #[must_use]
    pub fn body(mut self, body: Bytes) -> Self {
        self.body = Some(body);
        self
    }

    /// Set a JSON body.
    ///
    /// Explicit `null` fields in `value` are preserved on the wire.
    ///
    /// # Errors
    ///
    /// Returns a contract error if serialization fails.
    pub fn json<T: serde::Serialize>(self, value: &T) -> crate::Result<Self> {
        let body = crate::to_json(value)?;
        Ok(self.header("Content-Type", "application/json").body(body))
    }

    /// Set a form-urlencoded body.
    ///
    /// # Errors
    ///
    /// Returns a contract error if serialization fails.
    pub fn form<T: serde::Serialize>(self, value: &T) -> crate::Result<Self> {
        let body = crate::to_form(value)?;
        Ok(self
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body))
    }

    /// Set a multipart form-data body.
    ///
    /// The boundary-bearing `Content-Type` comes from the form itself.
    #[must_use]
    pub fn multipart(self, form: Form) -> Self {
        let (content_type, body) = form.into_body();
        self.header("Content-Type", content_type).body(body)
    }

    /// Builds the [`Request`].
    #[must_use]
    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_basic() {
        let url = url::Url::parse("https://api.example.com/posts").expect("valid URL");
        let request = Request::builder(Method::Get, url)
            .header("Accept", "application/json")
            .build();

        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.url().as_str(), "https://api.example.com/posts");
        assert_eq!(request.header("Accept"), Some("application/json"));
        assert!(request.body().is_none());
    }

    #[test]
    fn request_builder_with_query() {
        let url = url::Url::parse("https://api.example.com/posts").expect("valid URL");
        let request = Request::builder(Method::Get, url)
            .query("page", "1")
            .query("per_page", "10")
            .build();

        assert_eq!(
            request.url().as_str(),
            "https://api.example.com/posts?page=1&per_page=10"
        );
    }

    #[test]
    fn request_builder_json() {
        #[derive(serde::Serialize)]
        struct CreatePost {
            title: String,
        }

        let url = url::Url::parse("https://api.example.com/posts").expect("valid URL");
        let request = Request::builder(Method::Post, url)
            .json(&CreatePost {
                title: "hello".to_string(),
            })
            .expect("json")
            .build();

        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(
            request.body().map(|b| b.as_ref()),
            Some(br#"{"title":"hello"}"#.as_ref())
        );
    }

    #[test]
    fn request_builder_multipart() {
        let url = url::Url::parse("https://api.example.com/upload").expect("valid URL");
        let form = Form::with_boundary("b123").text("name", "value");
        let request = Request::builder(Method::Post, url).multipart(form).build();

        assert_eq!(
            request.header("Content-Type"),
            Some("multipart/form-data; boundary=b123")
        );
        assert!(request.body().is_some());
    }

    #[test]
    fn later_headers_win() {
        let url = url::Url::parse("https://api.example.com/posts").expect("valid URL");
        let request = Request::builder(Method::Get, url)
            .header("Authorization", "A")
            .header("Authorization", "C")
            .build();

        assert_eq!(request.header("Authorization"), Some("C"));
    }
}
