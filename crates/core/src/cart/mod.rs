//! Shopping cart lines and their reconciliation.
//!
//! A client accumulates a local cart while browsing unauthenticated or
//! offline; once a server cart snapshot is available the two are merged with
//! [`merge`], the server cart winning every conflict.

pub mod key;
pub mod line;
pub mod merge;
pub mod snapshot;
pub mod summary;

pub use key::LineKey;
pub use line::{LocalCartLine, MergedCartLine, RemoteCartLine};
pub use merge::{Reconciliation, merge, reconcile};
pub use snapshot::{ItemList, LocalSnapshot, MergedSnapshot, RemoteSnapshot};
pub use summary::CartSummary;
