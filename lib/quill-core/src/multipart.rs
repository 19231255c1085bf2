//! Multipart form-data encoding.
//!
//! Used for upload flows such as featured images. Repeated field names
//! become repeated parts, matching how servers read array fields out of
//! multipart bodies.
//!
//! # Example
//!
//! ```
//! use quill_core::Form;
//!
//! let form = Form::new()
//!     .text("title", "Hello")
//!     .file("featured_image", "cover.png", vec![0x89, 0x50, 0x4E, 0x47]);
//!
//! let (content_type, body) = form.into_body();
//! assert!(content_type.starts_with("multipart/form-data; boundary="));
//! assert!(!body.is_empty());
//! ```

use bytes::{BufMut, Bytes, BytesMut};

/// A single part in a multipart form.
#[derive(Debug, Clone)]
pub struct Part {
    name: String,
    filename: Option<String>,
    content_type: Option<String>,
    data: Bytes,
}

impl Part {
    /// Create a part with the given name and data, no content type.
    #[must_use]
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            filename: None,
            content_type: None,
            data: data.into(),
        }
    }

    /// Create a text part (`text/plain; charset=utf-8`).
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filename: None,
            content_type: Some("text/plain; charset=utf-8".to_string()),
            data: Bytes::from(value.into()),
        }
    }

    /// Create a file part; the content type is guessed from the extension.
    #[must_use]
    pub fn file(
        name: impl Into<String>,
        filename: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        let filename = filename.into();
        let content_type = guess_content_type(&filename);
        Self {
            name: name.into(),
            filename: Some(filename),
            content_type: Some(content_type),
            data: data.into(),
        }
    }

    /// Override the content type for this part.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Part name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Filename, if set.
    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Content type, if set.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Part data.
    #[must_use]
    pub fn data(&self) -> &Bytes {
        &self.data
    }
}

/// Guess a content type from a filename extension.
fn guess_content_type(filename: &str) -> String {
    let extension = filename
        .rsplit('.')
        .next()
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "html" | "htm" => "text/html",
        "json" => "application/json",
        "csv" => "text/csv",
        "md" => "text/markdown",
        _ => "application/octet-stream",
    }
    .to_string()
}

/// A multipart form: an ordered list of parts plus a boundary.
#[derive(Debug, Clone)]
pub struct Form {
    parts: Vec<Part>,
    boundary: String,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    /// Create an empty form with a generated boundary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parts: Vec::new(),
            boundary: generate_boundary(),
        }
    }

    /// Create an empty form with a fixed boundary.
    ///
    /// The boundary must not appear in any part's data.
    #[must_use]
    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            parts: Vec::new(),
            boundary: boundary.into(),
        }
    }

    /// Append a part. The same name may appear more than once.
    #[must_use]
    pub fn part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    /// Append a text field.
    #[must_use]
    pub fn text(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.part(Part::text(name, value))
    }

    /// Append a file field.
    #[must_use]
    pub fn file(
        self,
        name: impl Into<String>,
        filename: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        self.part(Part::file(name, filename, data))
    }

    /// Boundary string.
    #[must_use]
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Parts in insertion order.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// The `Content-Type` header value for this form.
    #[must_use]
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Encode into (content-type header value, body bytes).
    #[must_use]
    pub fn into_body(self) -> (String, Bytes) {
        let content_type = self.content_type();
        let body = self.encode();
        (content_type, body)
    }

    fn encode(&self) -> Bytes {
        let mut buf = BytesMut::new();

        for part in &self.parts {
            buf.put_slice(b"--");
            buf.put_slice(self.boundary.as_bytes());
            buf.put_slice(b"\r\n");

            buf.put_slice(b"Content-Disposition: form-data; name=\"");
            buf.put_slice(part.name.as_bytes());
            buf.put_slice(b"\"");
            if let Some(filename) = &part.filename {
                buf.put_slice(b"; filename=\"");
                buf.put_slice(filename.as_bytes());
                buf.put_slice(b"\"");
            }
            buf.put_slice(b"\r\n");

            if let Some(content_type) = &part.content_type {
                buf.put_slice(b"Content-Type: ");
                buf.put_slice(content_type.as_bytes());
                buf.put_slice(b"\r\n");
            }

            buf.put_slice(b"\r\n");
            buf.put_slice(&part.data);
            buf.put_slice(b"\r\n");
        }

        buf.put_slice(b"--");
        buf.put_slice(self.boundary.as_bytes());
        buf.put_slice(b"--\r\n");

        buf.freeze()
    }
}

/// Generate a boundary unlikely to collide with part data.
fn generate_boundary() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);

    format!("----QuillBoundary{timestamp:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_text() {
        let part = Part::text("title", "Hello");
        assert_eq!(part.name(), "title");
        assert_eq!(part.data().as_ref(), b"Hello");
        assert_eq!(part.content_type(), Some("text/plain; charset=utf-8"));
        assert!(part.filename().is_none());
    }

    #[test]
    fn part_file_guesses_content_type() {
        let part = Part::file("featured_image", "cover.jpg", vec![0xFF, 0xD8]);
        assert_eq!(part.filename(), Some("cover.jpg"));
        assert_eq!(part.content_type(), Some("image/jpeg"));

        let part = Part::file("attachment", "unknown.xyz", vec![0]);
        assert_eq!(part.content_type(), Some("application/octet-stream"));
    }

    #[test]
    fn repeated_names_become_repeated_parts() {
        let form = Form::with_boundary("b")
            .text("tags", "rust")
            .text("tags", "http");

        assert_eq!(form.parts().len(), 2);
        let body = String::from_utf8(form.encode().to_vec()).expect("utf8");
        assert_eq!(body.matches("name=\"tags\"").count(), 2);
    }

    #[test]
    fn form_encode_framing() {
        let form = Form::with_boundary("boundary123").text("field", "value");
        let (content_type, body) = form.into_body();

        assert_eq!(content_type, "multipart/form-data; boundary=boundary123");

        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("--boundary123\r\n"));
        assert!(body.contains("Content-Disposition: form-data; name=\"field\"\r\n"));
        assert!(body.contains("value\r\n"));
        assert!(body.ends_with("--boundary123--\r\n"));
    }

    #[test]
    fn form_encode_with_file() {
        let form = Form::with_boundary("b456").file("upload", "notes.txt", "file content");
        let (_, body) = form.into_body();
        let body = String::from_utf8_lossy(&body);

        assert!(body.contains("name=\"upload\"; filename=\"notes.txt\""));
        assert!(body.contains("Content-Type: text/plain\r\n"));
        assert!(body.contains("file content\r\n"));
    }

    #[test]
    fn generated_boundaries_have_prefix() {
        let form = Form::new();
        assert!(form.boundary().starts_with("----QuillBoundary"));
    }
}
