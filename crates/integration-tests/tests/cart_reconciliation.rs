//! Integration tests for cart reconciliation.
//!
//! Exercises `merge` and `reconcile` through the public API only.

use vitrine_core::cart::{CartSummary, LocalCartLine, merge, reconcile};
use vitrine_core::CurrencyCode;
use vitrine_integration_tests::{find, key, local, remote};

// =============================================================================
// Core Contract
// =============================================================================

#[test]
fn test_empty_carts_merge_to_empty() {
    assert!(merge(&[], &[]).is_empty());
}

#[test]
fn test_stable_remote_is_idempotent() {
    let remote_cart = [remote("p1", None, 1, 10000)];
    let first = merge(&[local("p1", None, 1, 10000)], &remote_cart);
    assert_eq!(first.len(), 1);
    assert_eq!(first.first().map(|l| l.quantity), Some(1));

    // Hydrate repeatedly, persisting the result locally each time.
    let mut current = first.clone();
    for _ in 0..5 {
        let as_local: Vec<LocalCartLine> = current.iter().map(LocalCartLine::from).collect();
        current = merge(&as_local, &remote_cart);
    }
    assert_eq!(current, first, "quantities must never double across hydrations");
}

#[test]
fn test_remote_wins_regardless_of_local_quantity() {
    for local_quantity in [0, 1, 2, 5, 100] {
        let merged = merge(
            &[local("p1", None, local_quantity, 10000)],
            &[remote("p1", None, 2, 10000)],
        );
        assert_eq!(merged.len(), 1);
        assert_eq!(
            find(&merged, &key("p1", None)).map(|l| l.quantity),
            Some(2),
            "local quantity {local_quantity} must not leak into the result"
        );
    }
}

#[test]
fn test_local_only_line_preserved() {
    let merged = merge(&[local("p1", None, 2, 10000)], &[]);
    assert_eq!(merged.len(), 1);
    let line = find(&merged, &key("p1", None)).expect("p1 present");
    assert_eq!(line.quantity, 2);
    assert_eq!(line.unit_price, 10000);
    assert_eq!(line.variant_identifier, None);
}

#[test]
fn test_disjoint_union() {
    let merged = merge(
        &[local("p1", None, 1, 100)],
        &[remote("p2", None, 4, 250)],
    );
    assert_eq!(merged.len(), 2);
    let p1 = find(&merged, &key("p1", None)).expect("p1 present");
    let p2 = find(&merged, &key("p2", None)).expect("p2 present");
    assert_eq!((p1.quantity, p1.unit_price), (1, 100));
    assert_eq!((p2.quantity, p2.unit_price), (4, 250));
}

#[test]
fn test_variant_discrimination() {
    let merged = merge(
        &[local("p1", Some("size-P"), 1, 100)],
        &[remote("p1", Some("size-G"), 1, 100)],
    );
    assert_eq!(merged.len(), 2);
    assert!(find(&merged, &key("p1", Some("size-P"))).is_some());
    assert!(find(&merged, &key("p1", Some("size-G"))).is_some());
    assert!(find(&merged, &key("p1", None)).is_none());
}

// =============================================================================
// Ordering And Duplicates
// =============================================================================

#[test]
fn test_remote_lines_come_first() {
    let merged = merge(
        &[local("a", None, 1, 1), local("b", None, 1, 1)],
        &[remote("c", None, 1, 1), remote("a", None, 3, 1)],
    );
    let keys: Vec<String> = merged.iter().map(|l| l.key().to_string()).collect();
    assert_eq!(keys, ["c_null", "a_null", "b_null"]);
}

#[test]
fn test_merge_is_deterministic() {
    let local_cart = [
        local("p3", None, 1, 1),
        local("p1", Some("red"), 2, 1),
        local("p2", None, 3, 1),
    ];
    let remote_cart = [remote("p2", None, 9, 1), remote("p4", Some("blue"), 1, 1)];
    let first = merge(&local_cart, &remote_cart);
    for _ in 0..10 {
        assert_eq!(merge(&local_cart, &remote_cart), first);
    }
}

#[test]
fn test_duplicates_are_reported_not_rejected() {
    let report = reconcile(
        &[local("p2", None, 1, 1), local("p2", None, 4, 1)],
        &[remote("p1", None, 1, 1), remote("p1", None, 6, 1)],
    );
    assert_eq!(report.lines.len(), 2);
    assert_eq!(find(&report.lines, &key("p1", None)).map(|l| l.quantity), Some(6));
    assert_eq!(find(&report.lines, &key("p2", None)).map(|l| l.quantity), Some(4));
    assert_eq!(report.duplicate_keys, vec![key("p1", None), key("p2", None)]);
}

#[test]
fn test_report_matches_merge() {
    let local_cart = [local("p1", None, 5, 1), local("p9", None, 1, 1)];
    let remote_cart = [remote("p1", None, 2, 1)];
    let report = reconcile(&local_cart, &remote_cart);
    assert_eq!(report.lines, merge(&local_cart, &remote_cart));
    assert_eq!(report.from_remote, 1);
    assert_eq!(report.local_added, 1);
    assert_eq!(report.local_overridden, vec![key("p1", None)]);
}

// =============================================================================
// Totals
// =============================================================================

#[test]
fn test_summary_of_merged_cart() {
    let merged = merge(
        &[local("p1", None, 5, 10000), local("p2", None, 1, 2550)],
        &[remote("p1", None, 2, 10000)],
    );
    let summary = CartSummary::from_lines(&merged);
    assert_eq!(summary.line_count, 2);
    assert_eq!(summary.item_count, 3);
    assert_eq!(summary.subtotal(CurrencyCode::USD).display(), "$225.50");
}
