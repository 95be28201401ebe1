//! Integration tests for Vitrine.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vitrine-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_reconciliation` - Merge contract over the public API
//! - `cart_snapshots` - Client and server JSON documents through the merge
//!
//! This crate holds the fixtures shared by those files.

#![cfg_attr(not(test), forbid(unsafe_code))]

use serde_json::Value;
use vitrine_core::VariantRef;
use vitrine_core::cart::{LineKey, LocalCartLine, MergedCartLine, RemoteCartLine};

/// Build a client-side line.
#[must_use]
pub fn local(id: &str, variant: Option<&str>, quantity: i64, price: i64) -> LocalCartLine {
    LocalCartLine::new(id, variant.map(VariantRef::from), quantity, price)
}

/// Build a server-side line.
#[must_use]
pub fn remote(id: &str, variant: Option<&str>, quantity: i64, price: i64) -> RemoteCartLine {
    RemoteCartLine::new(id, variant.map(VariantRef::from), quantity, price)
}

/// Build an identity key.
#[must_use]
pub fn key(id: &str, variant: Option<&str>) -> LineKey {
    LineKey::new(id.into(), variant.map(VariantRef::from))
}

/// Find the merged line for a key.
#[must_use]
pub fn find<'a>(lines: &'a [MergedCartLine], key: &LineKey) -> Option<&'a MergedCartLine> {
    lines.iter().find(|line| &line.key() == key)
}

/// Parse client lines from a JSON value.
///
/// # Panics
///
/// Panics if the value is not an array of local lines.
#[must_use]
#[allow(clippy::expect_used)]
pub fn local_from_json(value: Value) -> Vec<LocalCartLine> {
    serde_json::from_value(value).expect("fixture should be valid local lines")
}

/// Parse server lines from a JSON value.
///
/// # Panics
///
/// Panics if the value is not an array of remote lines.
#[must_use]
#[allow(clippy::expect_used)]
pub fn remote_from_json(value: Value) -> Vec<RemoteCartLine> {
    serde_json::from_value(value).expect("fixture should be valid remote lines")
}
