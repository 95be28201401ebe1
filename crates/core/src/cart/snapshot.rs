//! JSON documents holding one side of a cart.
//!
//! Clients persist their cart either as a bare array of lines or inside the
//! state store's envelope (`{"state": {"items": [...]}, "version": 0}`). The
//! server answers with `{"items": [...]}` plus fields we ignore. Each snapshot
//! type accepts every shape its side is known to produce.
//!
//! The shape is picked from the document's first token rather than by trial,
//! so a malformed line is reported with its own error and position.

use serde::Deserialize;
use serde::de::Error as _;

use super::line::{LocalCartLine, MergedCartLine, RemoteCartLine};

/// A local cart as read from client storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalSnapshot {
    /// `[{...}, ...]`
    Lines(Vec<LocalCartLine>),
    /// `{"state": {"items": [...]}, "version": N}`
    Persisted { state: ItemList<LocalCartLine> },
    /// `{"items": [...]}`
    Items(ItemList<LocalCartLine>),
}

/// Object forms of a local snapshot.
#[derive(Deserialize)]
struct LocalEnvelope {
    state: Option<ItemList<LocalCartLine>>,
    items: Option<Vec<LocalCartLine>>,
}

impl LocalSnapshot {
    /// Parse a local snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text matches none of the accepted shapes, or
    /// the error of the first line that fails to parse.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        if is_array(json) {
            return serde_json::from_str(json).map(Self::Lines);
        }
        match serde_json::from_str::<LocalEnvelope>(json)? {
            LocalEnvelope {
                state: Some(state), ..
            } => Ok(Self::Persisted { state }),
            LocalEnvelope {
                items: Some(items), ..
            } => Ok(Self::Items(ItemList { items })),
            LocalEnvelope { .. } => Err(serde_json::Error::custom(
                "expected an array of lines or an object with `state` or `items`",
            )),
        }
    }

    /// The lines held by the snapshot.
    #[must_use]
    pub fn into_lines(self) -> Vec<LocalCartLine> {
        match self {
            Self::Lines(lines) => lines,
            Self::Persisted { state } => state.items,
            Self::Items(list) => list.items,
        }
    }
}

/// A remote cart as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteSnapshot {
    /// `[{...}, ...]`
    Lines(Vec<RemoteCartLine>),
    /// `{"items": [...], ...}`
    Items(ItemList<RemoteCartLine>),
}

impl RemoteSnapshot {
    /// Parse a remote snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text matches none of the accepted shapes, or
    /// the error of the first line that fails to parse.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        if is_array(json) {
            serde_json::from_str(json).map(Self::Lines)
        } else {
            serde_json::from_str(json).map(Self::Items)
        }
    }

    /// The lines held by the snapshot.
    #[must_use]
    pub fn into_lines(self) -> Vec<RemoteCartLine> {
        match self {
            Self::Lines(lines) => lines,
            Self::Items(list) => list.items,
        }
    }
}

/// A merged cart, as written after hydration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergedSnapshot {
    /// `[{...}, ...]`
    Lines(Vec<MergedCartLine>),
    /// `{"items": [...]}`
    Items(ItemList<MergedCartLine>),
}

impl MergedSnapshot {
    /// Parse a merged snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text matches none of the accepted shapes, or
    /// the error of the first line that fails to parse.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        if is_array(json) {
            serde_json::from_str(json).map(Self::Lines)
        } else {
            serde_json::from_str(json).map(Self::Items)
        }
    }

    /// The lines held by the snapshot.
    #[must_use]
    pub fn into_lines(self) -> Vec<MergedCartLine> {
        match self {
            Self::Lines(lines) => lines,
            Self::Items(list) => list.items,
        }
    }
}

/// An object wrapping a list of lines under `items`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemList<T> {
    pub items: Vec<T>,
}

fn is_array(json: &str) -> bool {
    json.trim_start().starts_with('[')
}
