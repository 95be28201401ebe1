//! Cart reconciliation: merging a client-held cart with the server cart.
//!
//! The server cart is authoritative. Every remote line is taken verbatim;
//! a local line survives only when the server has nothing under the same
//! [`LineKey`]. Quantities are never summed across the two sides, so merging
//! the same local cart against an unchanged server cart any number of times
//! yields the same result.
//!
//! Output order is deterministic: remote keys in order of first appearance,
//! then local-only keys in order of first appearance. A key repeated within
//! one input list keeps its first position and takes the last value.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::key::LineKey;
use super::line::{LocalCartLine, MergedCartLine, RemoteCartLine};

/// Merge a local cart with a remote cart.
///
/// Inputs are borrowed and never modified. The function has no failure mode
/// and performs no I/O.
///
/// ```
/// use vitrine_core::cart::{LocalCartLine, RemoteCartLine, merge};
///
/// let local = [LocalCartLine::new("p1", None, 5, 10000)];
/// let remote = [RemoteCartLine::new("p1", None, 2, 10000)];
///
/// let merged = merge(&local, &remote);
/// assert_eq!(merged.len(), 1);
/// assert_eq!(merged[0].quantity, 2);
/// ```
#[must_use]
pub fn merge(local: &[LocalCartLine], remote: &[RemoteCartLine]) -> Vec<MergedCartLine> {
    reconcile(local, remote).lines
}

/// Outcome of a reconciliation, for callers that want to report on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    /// Merged lines, identical to what [`merge`] returns.
    pub lines: Vec<MergedCartLine>,
    /// Distinct keys contributed by the remote cart.
    pub from_remote: usize,
    /// Distinct local-only keys appended after the remote lines.
    pub local_added: usize,
    /// Local keys discarded because the remote cart already held them.
    pub local_overridden: Vec<LineKey>,
    /// Keys that appeared more than once within the same input list.
    pub duplicate_keys: Vec<LineKey>,
}

impl Reconciliation {
    /// Whether either input contained a repeated key.
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        !self.duplicate_keys.is_empty()
    }
}

/// Merge a local cart with a remote cart and report what happened.
///
/// Produces the same lines as [`merge`].
#[must_use]
pub fn reconcile(local: &[LocalCartLine], remote: &[RemoteCartLine]) -> Reconciliation {
    let mut merged = KeyedLines::with_capacity(local.len() + remote.len());
    let mut duplicates = KeyLog::default();

    // Remote pass: insert or overwrite verbatim.
    for line in remote {
        let key = line.key();
        if merged.upsert(key.clone(), MergedCartLine::from(line)) {
            duplicates.record(key);
        }
    }
    let from_remote = merged.len();

    // Local pass: fill the gaps the remote cart left.
    let mut overridden = KeyLog::default();
    let mut seen_local = HashSet::with_capacity(local.len());
    for line in local {
        let key = line.key();
        if !seen_local.insert(key.clone()) {
            duplicates.record(key.clone());
        }
        if merged.position(&key).is_some_and(|pos| pos < from_remote) {
            overridden.record(key);
            continue;
        }
        merged.upsert(key, MergedCartLine::from(line));
    }

    let local_added = merged.len() - from_remote;
    Reconciliation {
        lines: merged.into_lines(),
        from_remote,
        local_added,
        local_overridden: overridden.into_keys(),
        duplicate_keys: duplicates.into_keys(),
    }
}

/// Insertion-ordered mapping from key to merged line.
struct KeyedLines {
    index: HashMap<LineKey, usize>,
    lines: Vec<MergedCartLine>,
}

impl KeyedLines {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            lines: Vec::with_capacity(capacity),
        }
    }

    fn len(&self) -> usize {
        self.lines.len()
    }

    fn position(&self, key: &LineKey) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Insert `line` under `key`, overwriting in place if present.
    ///
    /// Returns `true` when an existing entry was overwritten.
    fn upsert(&mut self, key: LineKey, line: MergedCartLine) -> bool {
        if let Some(slot) = self.index.get(&key).and_then(|&pos| self.lines.get_mut(pos)) {
            *slot = line;
            return true;
        }
        self.index.insert(key, self.lines.len());
        self.lines.push(line);
        false
    }

    fn into_lines(self) -> Vec<MergedCartLine> {
        self.lines
    }
}

/// Keys recorded once each, in first-seen order.
#[derive(Default)]
struct KeyLog {
    seen: HashSet<LineKey>,
    keys: Vec<LineKey>,
}

impl KeyLog {
    fn record(&mut self, key: LineKey) {
        if self.seen.insert(key.clone()) {
            self.keys.push(key);
        }
    }

    fn into_keys(self) -> Vec<LineKey> {
        self.keys
    }
}
