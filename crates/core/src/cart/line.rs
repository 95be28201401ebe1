//! Cart line records as held by the client, by the server, and after merging.
//!
//! Quantities and unit prices are carried through unvalidated: a negative or
//! zero quantity is not this layer's concern.

use serde::{Deserialize, Serialize};

use super::key::LineKey;
use crate::types::id::deserialize_variant;
use crate::types::{ProductRef, VariantRef};

/// A line item known only to the client (browser storage, offline cart).
///
/// Serialized shape: `{"id": "p1" | 42, "variant_id": "size-P" | null,
/// "quantity": 1, "price": 10000}`. `variant` and `qty` are accepted as
/// aliases, as are the merged-cart names `product_id` and `unit_price`, so a
/// hydrated cart written back to storage reads as a local cart. Unknown
/// fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalCartLine {
    /// Product reference, written as a string or a number by the client.
    #[serde(rename = "id", alias = "product_id")]
    pub identifier: ProductRef,
    /// Variant reference, `None` for the base product.
    #[serde(
        rename = "variant_id",
        alias = "variant",
        default,
        deserialize_with = "deserialize_variant"
    )]
    pub variant_identifier: Option<VariantRef>,
    /// Number of units.
    #[serde(alias = "qty")]
    pub quantity: i64,
    /// Unit price in minor currency units.
    #[serde(rename = "price", alias = "unit_price")]
    pub unit_price: i64,
}

impl LocalCartLine {
    /// Create a local line.
    #[must_use]
    pub fn new(
        identifier: impl Into<ProductRef>,
        variant_identifier: Option<VariantRef>,
        quantity: i64,
        unit_price: i64,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            variant_identifier,
            quantity,
            unit_price,
        }
    }

    /// Identity key of this line.
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey::new(self.identifier.clone(), self.variant_identifier.clone())
    }
}

/// A line item as returned by the authoritative server-side cart.
///
/// Serialized shape: `{"product_id": "p1", "variant_id": null,
/// "quantity": 1, "unit_price": 10000}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteCartLine {
    #[serde(rename = "product_id")]
    pub product_identifier: ProductRef,
    #[serde(
        rename = "variant_id",
        alias = "variant",
        default,
        deserialize_with = "deserialize_variant"
    )]
    pub variant_identifier: Option<VariantRef>,
    #[serde(alias = "qty")]
    pub quantity: i64,
    #[serde(alias = "price")]
    pub unit_price: i64,
}

impl RemoteCartLine {
    /// Create a remote line.
    #[must_use]
    pub fn new(
        product_identifier: impl Into<ProductRef>,
        variant_identifier: Option<VariantRef>,
        quantity: i64,
        unit_price: i64,
    ) -> Self {
        Self {
            product_identifier: product_identifier.into(),
            variant_identifier,
            quantity,
            unit_price,
        }
    }

    /// Identity key of this line.
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey::new(
            self.product_identifier.clone(),
            self.variant_identifier.clone(),
        )
    }
}

/// A normalized line item produced by the reconciler.
///
/// Serialized with the same field names as [`RemoteCartLine`]; `variant_id`
/// is always present and `null` for the base product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedCartLine {
    #[serde(rename = "product_id")]
    pub product_identifier: ProductRef,
    #[serde(
        rename = "variant_id",
        alias = "variant",
        default,
        deserialize_with = "deserialize_variant"
    )]
    pub variant_identifier: Option<VariantRef>,
    pub quantity: i64,
    pub unit_price: i64,
}

impl MergedCartLine {
    /// Identity key of this line.
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey::new(
            self.product_identifier.clone(),
            self.variant_identifier.clone(),
        )
    }

    /// `quantity * unit_price`, saturating at the `i64` bounds.
    #[must_use]
    pub const fn line_total(&self) -> i64 {
        self.quantity.saturating_mul(self.unit_price)
    }

    fn from_parts(key: LineKey, quantity: i64, unit_price: i64) -> Self {
        let (product, variant) = key.into_parts();
        Self {
            product_identifier: product,
            variant_identifier: variant,
            quantity,
            unit_price,
        }
    }
}

impl From<&RemoteCartLine> for MergedCartLine {
    fn from(line: &RemoteCartLine) -> Self {
        Self::from_parts(line.key(), line.quantity, line.unit_price)
    }
}

impl From<&LocalCartLine> for MergedCartLine {
    fn from(line: &LocalCartLine) -> Self {
        Self::from_parts(line.key(), line.quantity, line.unit_price)
    }
}

/// Turns a hydrated line back into the client's shape so it can be persisted
/// locally and merged again.
impl From<&MergedCartLine> for LocalCartLine {
    fn from(line: &MergedCartLine) -> Self {
        Self {
            identifier: line.product_identifier.clone(),
            variant_identifier: line.variant_identifier.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price,
        }
    }
}

impl From<MergedCartLine> for LocalCartLine {
    fn from(line: MergedCartLine) -> Self {
        Self {
            identifier: line.product_identifier,
            variant_identifier: line.variant_identifier,
            quantity: line.quantity,
            unit_price: line.unit_price,
        }
    }
}
