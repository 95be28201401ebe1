//! Identity key shared by local, remote and merged cart lines.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{ProductRef, VariantRef};

/// The `(product, variant)` pair that decides whether two cart lines refer to
/// the same purchasable item.
///
/// Price never takes part in identity. A blank variant is normalized to
/// `None` on construction, so "no variant" has a single representation.
///
/// ```
/// use vitrine_core::cart::LineKey;
/// use vitrine_core::{ProductRef, VariantRef};
///
/// let base = LineKey::new(ProductRef::from(42), Some(VariantRef::new("")));
/// assert_eq!(base, LineKey::new(ProductRef::new("42"), None));
/// assert_eq!(base.to_string(), "42_null");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineKey {
    product: ProductRef,
    variant: Option<VariantRef>,
}

impl LineKey {
    /// Marker used in place of the variant when rendering a base-product key.
    pub const NO_VARIANT: &'static str = "null";

    /// Create a key, collapsing a blank variant to `None`.
    #[must_use]
    pub fn new(product: ProductRef, variant: Option<VariantRef>) -> Self {
        Self {
            product,
            variant: variant.filter(|v| !v.is_blank()),
        }
    }

    /// The product half of the key.
    #[must_use]
    pub const fn product(&self) -> &ProductRef {
        &self.product
    }

    /// The variant half of the key, `None` for the base product.
    #[must_use]
    pub const fn variant(&self) -> Option<&VariantRef> {
        self.variant.as_ref()
    }

    /// Split the key into its product and variant halves.
    #[must_use]
    pub fn into_parts(self) -> (ProductRef, Option<VariantRef>) {
        (self.product, self.variant)
    }
}

/// Renders the composite `<product>_<variant>` form used in log output.
///
/// The rendering is not injective (`"a_b"` + no variant and `"a"` + `"b_null"`
/// can collide); compare keys, not their strings.
impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.variant {
            Some(variant) => write!(f, "{}_{variant}", self.product),
            None => write!(f, "{}_{}", self.product, Self::NO_VARIANT),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_same_product_different_variants_are_distinct() {
        let small = LineKey::new("p1".into(), Some("size-P".into()));
        let large = LineKey::new("p1".into(), Some("size-G".into()));
        assert_ne!(small, large);
    }

    #[test]
    fn test_blank_variant_is_base_product() {
        let blank = LineKey::new("p1".into(), Some(VariantRef::new("")));
        let none = LineKey::new("p1".into(), None);
        assert_eq!(blank, none);
        assert!(blank.variant().is_none());
    }

    #[test]
    fn test_variant_named_null_is_not_base_product() {
        let named = LineKey::new("p1".into(), Some("null".into()));
        let base = LineKey::new("p1".into(), None);
        assert_ne!(named, base);
        // Same rendering, different identity.
        assert_eq!(named.to_string(), base.to_string());
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        let mut keys = HashSet::new();
        keys.insert(LineKey::new(ProductRef::from(7), None));
        assert!(keys.contains(&LineKey::new(ProductRef::new("7"), None)));
    }

    #[test]
    fn test_display() {
        let key = LineKey::new("p1".into(), Some("size-G".into()));
        assert_eq!(key.to_string(), "p1_size-G");
        assert_eq!(LineKey::new("p2".into(), None).to_string(), "p2_null");
    }
}
