//! Tri-state fields for partial updates.
//!
//! JSON partial updates distinguish a field that is *omitted* (leave the
//! stored value unchanged) from a field that is explicitly *null* (clear the
//! stored value). `Option<T>` cannot express both, so update payloads use
//! [`Patch<T>`] instead.
//!
//! Declare fields with both serde attributes:
//!
//! ```
//! use quill_core::Patch;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Update {
//!     #[serde(default, skip_serializing_if = "Patch::is_absent")]
//!     title: Patch<String>,
//! }
//! ```

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// A field of a partial-update payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Patch<T> {
    /// Field omitted from the payload; the server leaves it unchanged.
    #[default]
    Absent,
    /// Field serialized as JSON `null`; the server clears it.
    Null,
    /// Field set to a new value.
    Value(T),
}

impl<T> Patch<T> {
    /// Returns `true` if the field is omitted from the payload.
    ///
    /// This is the `skip_serializing_if` predicate.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if the field clears the stored value.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the new value, if one is set.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Map the contained value, preserving `Absent`/`Null`.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Patch<U> {
        match self {
            Self::Absent => Patch::Absent,
            Self::Null => Patch::Null,
            Self::Value(value) => Patch::Value(f(value)),
        }
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

/// `Some` sets the value, `None` clears it. An omitted field is expressed by
/// `Patch::Absent` (the `Default`), not by this conversion.
impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Absent fields are skipped by the field attribute; if one is
            // serialized anyway it degrades to null.
            Self::Absent | Self::Null => serializer.serialize_none(),
            Self::Value(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Update {
        #[serde(default, skip_serializing_if = "Patch::is_absent")]
        title: Patch<String>,
        #[serde(default, skip_serializing_if = "Patch::is_absent")]
        excerpt: Patch<String>,
        content: String,
    }

    #[test]
    fn absent_is_omitted_null_is_kept() {
        let update = Update {
            title: Patch::Null,
            excerpt: Patch::Absent,
            content: "x".to_string(),
        };

        let json = serde_json::to_string(&update).expect("serialize");
        assert_eq!(json, r#"{"title":null,"content":"x"}"#);
    }

    #[test]
    fn value_serializes_inline() {
        let update = Update {
            title: Patch::Value("New title".to_string()),
            excerpt: Patch::Absent,
            content: "x".to_string(),
        };

        let json = serde_json::to_string(&update).expect("serialize");
        assert_eq!(json, r#"{"title":"New title","content":"x"}"#);
    }

    #[test]
    fn deserialize_distinguishes_all_three_states() {
        let update: Update =
            serde_json::from_str(r#"{"title":null,"content":"x"}"#).expect("deserialize");
        assert_eq!(update.title, Patch::Null);
        assert_eq!(update.excerpt, Patch::Absent);

        let update: Update =
            serde_json::from_str(r#"{"title":"t","content":"x"}"#).expect("deserialize");
        assert_eq!(update.title, Patch::Value("t".to_string()));
    }

    #[test]
    fn conversions() {
        assert_eq!(Patch::from("a".to_string()), Patch::Value("a".to_string()));
        assert_eq!(Patch::<String>::from(None), Patch::Null);
        assert_eq!(Patch::from(Some(1)), Patch::Value(1));
        assert_eq!(Patch::<u32>::default(), Patch::Absent);
    }

    #[test]
    fn accessors() {
        let patch = Patch::Value(3);
        assert_eq!(patch.value(), Some(&3));
        assert!(!patch.is_absent());
        assert!(!patch.is_null());
        assert_eq!(patch.map(|n| n * 2), Patch::Value(6));
        assert_eq!(Patch::<u32>::Null.map(|n| n * 2), Patch::Null);
    }
}
