//! HTTP method types.

use derive_more::Display;

/// HTTP request method.
///
/// Only the verbs used by the blog API contracts are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Method {
    /// GET method - retrieve a resource.
    #[display("GET")]
    Get,
    /// POST method - create a resource.
    #[display("POST")]
    Post,
    /// PUT method - update a resource.
    #[display("PUT")]
    Put,
    /// DELETE method - remove a resource.
    #[display("DELETE")]
    Delete,
}

impl Method {
    /// Returns `true` if the method is safe (does not modify resources).
    #[must_use]
    pub const fn is_safe(&self) -> bool {
        matches!(self, Self::Get)
    }

    /// Returns `true` if the method is idempotent.
    #[must_use]
    pub const fn is_idempotent(&self) -> bool {
        matches!(self, Self::Get | Self::Put | Self::Delete)
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
        assert_eq!(Method::Put.to_string(), "PUT");
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }

    #[test]
    fn method_is_safe() {
        assert!(Method::Get.is_safe());
        assert!(!Method::Post.is_safe());
        assert!(!Method::Put.is_safe());
        assert!(!Method::Delete.is_safe());
    }

    #[test]
    fn method_is_idempotent() {
        assert!(Method::Get.is_idempotent());
        assert!(Method::Put.is_idempotent());
        assert!(Method::Delete.is_idempotent());
        assert!(!Method::Post.is_idempotent());
    }

    #[test]
    fn method_into_http() {
        assert_eq!(http::Method::from(Method::Get), http::Method::GET);
        assert_eq!(http::Method::from(Method::Delete), http::Method::DELETE);
    }
}
