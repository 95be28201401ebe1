//! Core types for Vitrine.
//!
//! This module provides type-safe wrappers for catalog references and prices.

pub mod id;
pub mod price;

pub use id::{ProductRef, VariantRef};
pub use price::{CurrencyCode, CurrencyError, Price};
