//! Newtype references for catalog entities carried on cart lines.
//!
//! Cart lines arrive from two places: browser storage, where product ids may
//! have been written as numbers, and the server cart, where they are strings.
//! The `define_ref!` macro creates string-backed wrappers that accept either
//! form on deserialization and always hold the canonical string form, so that
//! `42` and `"42"` compare equal.

use serde::{Deserialize, Deserializer};

/// A loosely-typed JSON scalar as it may appear in an identifier field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawRef {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Flag(bool),
}

impl RawRef {
    /// Canonical string form of the scalar.
    pub(crate) fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Integer(n) => n.to_string(),
            Self::Unsigned(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Flag(flag) => flag.to_string(),
        }
    }

    /// Whether the scalar is one of the "no value" markers: `""`, `0` or `false`.
    #[allow(clippy::float_cmp)]
    pub(crate) fn is_falsy(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Integer(n) => *n == 0,
            Self::Unsigned(n) => *n == 0,
            Self::Float(n) => *n == 0.0 || n.is_nan(),
            Self::Flag(flag) => !flag,
        }
    }
}

/// Macro to define a string-backed reference wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize` with `#[serde(transparent)]`
/// - `Deserialize` from a JSON string, number or boolean (stored as text)
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<&str>`, `From<String>` and `From<i64>` implementations
macro_rules! define_ref {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, ::serde::Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new reference from its string form.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the reference as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the reference and returns its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                RawRef::deserialize(deserializer).map(|raw| Self(raw.into_text()))
            }
        }
    };
}

define_ref!(
    /// Product reference on a cart line, normalized to its string form.
    ProductRef
);

define_ref!(
    /// Variant (size, color, ...) reference on a cart line.
    ///
    /// A line without a variant is modelled as `Option::<VariantRef>::None`,
    /// never as an empty `VariantRef`.
    VariantRef
);

impl VariantRef {
    /// Whether this reference carries no usable value.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

/// Deserialize an optional variant, collapsing every "no variant" marker.
///
/// `null`, `""`, `0` and `false` all become `None`; a missing field is
/// handled by pairing this with `#[serde(default)]`.
///
/// # Errors
///
/// Returns the deserializer's error if the value is not a JSON scalar.
pub(crate) fn deserialize_variant<'de, D>(deserializer: D) -> Result<Option<VariantRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawRef>::deserialize(deserializer)?;
    Ok(raw
        .filter(|raw| !raw.is_falsy())
        .map(|raw| VariantRef(raw.into_text())))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct VariantHolder {
        #[serde(default, deserialize_with = "deserialize_variant")]
        variant: Option<VariantRef>,
    }

    fn variant_of(json: &str) -> Option<VariantRef> {
        serde_json::from_str::<VariantHolder>(json).unwrap().variant
    }

    #[test]
    fn test_product_ref_from_string() {
        let id: ProductRef = serde_json::from_str(r#""p1""#).unwrap();
        assert_eq!(id.as_str(), "p1");
    }

    #[test]
    fn test_product_ref_from_number_matches_string() {
        let numeric: ProductRef = serde_json::from_str("42").unwrap();
        let text: ProductRef = serde_json::from_str(r#""42""#).unwrap();
        assert_eq!(numeric, text);
        assert_eq!(numeric, ProductRef::from(42));
    }

    #[test]
    fn test_product_ref_above_i64_range_stays_exact() {
        let max: ProductRef = serde_json::from_str("18446744073709551615").unwrap();
        let below: ProductRef = serde_json::from_str("18446744073709551614").unwrap();
        assert_eq!(max.as_str(), "18446744073709551615");
        assert_eq!(below.as_str(), "18446744073709551614");
        assert_ne!(max, below);
    }

    #[test]
    fn test_product_ref_from_float() {
        let id: ProductRef = serde_json::from_str("1.5").unwrap();
        assert_eq!(id.as_str(), "1.5");
    }

    #[test]
    fn test_product_ref_serializes_as_plain_string() {
        let json = serde_json::to_string(&ProductRef::new("p1")).unwrap();
        assert_eq!(json, r#""p1""#);
    }

    #[test]
    fn test_product_ref_rejects_objects() {
        assert!(serde_json::from_str::<ProductRef>(r#"{"id":"p1"}"#).is_err());
    }

    #[test]
    fn test_variant_present() {
        assert_eq!(
            variant_of(r#"{"variant":"size-P"}"#),
            Some(VariantRef::new("size-P"))
        );
        assert_eq!(variant_of(r#"{"variant":7}"#), Some(VariantRef::new("7")));
    }

    #[test]
    fn test_variant_falsy_markers_are_none() {
        assert_eq!(variant_of("{}"), None);
        assert_eq!(variant_of(r#"{"variant":null}"#), None);
        assert_eq!(variant_of(r#"{"variant":""}"#), None);
        assert_eq!(variant_of(r#"{"variant":0}"#), None);
        assert_eq!(variant_of(r#"{"variant":false}"#), None);
    }

    #[test]
    fn test_variant_string_zero_is_a_value() {
        // Only the numeric zero is falsy; the string "0" names a variant.
        assert_eq!(variant_of(r#"{"variant":"0"}"#), Some(VariantRef::new("0")));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", VariantRef::new("size-G")), "size-G");
    }
}
