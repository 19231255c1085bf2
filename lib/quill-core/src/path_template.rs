//! Path templates with placeholder substitution.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::{Error, Result};

/// Encoding set for a single path segment: unreserved characters pass
/// through, everything that would alter the URL structure is escaped.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\')
    .add(b'%');

/// An operation's path pattern, e.g. `/routes/blog/posts/{slug}`.
///
/// Placeholders are `{name}` segments substituted at request-construction
/// time. The un-substituted pattern stays available for logging and
/// middleware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathTemplate(&'static str);

impl PathTemplate {
    /// Create a new path template.
    #[must_use]
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    /// Get the template string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Placeholder names, in order of appearance.
    #[must_use]
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.0;
        while let Some(start) = rest.find('{') {
            let (_, tail) = rest.split_at(start);
            let Some(tail) = tail.strip_prefix('{') else {
                break;
            };
            let Some(end) = tail.find('}') else {
                break;
            };
            let (name, remainder) = tail.split_at(end);
            names.push(name);
            rest = remainder.strip_prefix('}').unwrap_or(remainder);
        }
        names
    }

    /// Substitute every placeholder with its percent-encoded value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Contract`] if a placeholder has no supplied value or
    /// the template is malformed. No I/O has happened at this point.
    pub fn render(&self, params: &[(&str, &str)]) -> Result<String> {
        let mut out = String::with_capacity(self.0.len());
        let mut rest = self.0;

        while let Some(start) = rest.find('{') {
            let (head, tail) = rest.split_at(start);
            out.push_str(head);

            let tail = tail.strip_prefix('{').unwrap_or(tail);
            let Some(end) = tail.find('}') else {
                return Err(Error::contract(format!(
                    "unbalanced placeholder in path template `{}`",
                    self.0
                )));
            };
            let (name, remainder) = tail.split_at(end);

            let value = params
                .iter()
                .find_map(|(key, value)| (*key == name).then_some(*value))
                .ok_or_else(|| {
                    Error::contract(format!(
                        "missing path parameter `{name}` for `{}`",
                        self.0
                    ))
                })?;
            out.extend(utf8_percent_encode(value, PATH_SEGMENT_ENCODE_SET));

            rest = remainder.strip_prefix('}').unwrap_or(remainder);
        }

        out.push_str(rest);
        Ok(out)
    }
}

impl std::fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PathTemplate {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::let_assert;

    #[test]
    fn render_without_placeholders() {
        let template = PathTemplate::new("/routes/blog/posts");
        let path = template.render(&[]).expect("render");
        assert_eq!(path, "/routes/blog/posts");
    }

    #[test]
    fn render_substitutes_placeholders() {
        let template = PathTemplate::new("/routes/blog/posts/{slug}");
        let path = template
            .render(&[("slug", "hello-world")])
            .expect("render");
        assert_eq!(path, "/routes/blog/posts/hello-world");
    }

    #[test]
    fn render_percent_encodes_values() {
        let template = PathTemplate::new("/routes/blog/posts/{slug}");
        let path = template
            .render(&[("slug", "a b/c?d")])
            .expect("render");
        assert_eq!(path, "/routes/blog/posts/a%20b%2Fc%3Fd");
    }

    #[test]
    fn render_missing_parameter_is_contract_error() {
        let template = PathTemplate::new("/routes/blog/posts/{post_id}");
        let err = template.render(&[]).expect_err("should fail");
        let_assert!(Error::Contract(message) = err);
        assert!(message.contains("post_id"), "message: {message}");
    }

    #[test]
    fn render_unbalanced_placeholder_is_contract_error() {
        let template = PathTemplate::new("/routes/blog/posts/{slug");
        let err = template.render(&[("slug", "x")]).expect_err("should fail");
        assert!(err.is_contract());
    }

    #[test]
    fn placeholders_in_order() {
        let template = PathTemplate::new("/users/{id}/posts/{post_id}");
        assert_eq!(template.placeholders(), vec!["id", "post_id"]);
        assert!(PathTemplate::new("/_healthz").placeholders().is_empty());
    }

    #[test]
    fn template_as_str() {
        let template = PathTemplate::new("/routes/blog/posts/{slug}");
        assert_eq!(template.as_str(), "/routes/blog/posts/{slug}");
        assert_eq!(template.to_string(), "/routes/blog/posts/{slug}");
    }
}
