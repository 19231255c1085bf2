//! Static operation contracts.
//!
//! Every logical API operation is described by one [`Operation`] entry:
//! pure data binding a method and path template to the request shape the
//! executor must produce. The entries form a `const` table; a single
//! generic call function consumes them, so no per-operation request code
//! exists.

use crate::{ContentType, Method, PathTemplate};

/// Static contract for one API operation.
///
/// Request and response payload shapes are carried by the Rust types the
/// caller supplies; the contract holds what cannot live in the type system:
/// the route, the verb, contract-level headers, and the declared body
/// encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Operation name, used in logs and error messages.
    pub name: &'static str,
    /// HTTP method.
    pub method: Method,
    /// Path pattern with `{name}` placeholders for required path parameters.
    pub path: PathTemplate,
    /// Headers declared by the contract itself. Merged above client
    /// defaults and below call-time headers.
    pub headers: &'static [(&'static str, &'static str)],
    /// Declared request-body encoding, when the operation takes a body.
    pub content_type: Option<ContentType>,
}

impl Operation {
    /// Names of the path parameters this operation requires.
    #[must_use]
    pub fn path_params(&self) -> Vec<&'static str> {
        self.path.placeholders()
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.name, self.method, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GET_POST: Operation = Operation {
        name: "get_post",
        method: Method::Get,
        path: PathTemplate::new("/posts/{slug}"),
        headers: &[("Accept", "application/json")],
        content_type: None,
    };

    #[test]
    fn operation_path_params() {
        assert_eq!(GET_POST.path_params(), vec!["slug"]);
    }

    #[test]
    fn operation_display() {
        assert_eq!(GET_POST.to_string(), "get_post GET /posts/{slug}");
    }
}
