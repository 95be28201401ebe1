//! Vitrine Core - Cart reconciliation and shared types.
//!
//! This crate provides the types and pure logic shared by Vitrine components:
//! - `cli` - Command-line hydration and inspection tools
//! - `integration-tests` - End-to-end checks of the reconciliation contract
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no logging,
//! no HTTP clients. Callers own fetching the server cart, reading client
//! storage, and writing the merged result back.
//!
//! # Modules
//!
//! - [`cart`] - Cart line model, identity keys, merge, summaries, snapshots
//! - [`types`] - Product/variant references and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use types::*;
