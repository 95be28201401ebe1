//! Totals over a merged cart.

use serde::{Deserialize, Serialize};

use super::line::MergedCartLine;
use crate::types::{CurrencyCode, Price};

/// Line count, item count and subtotal of a cart.
///
/// Sums saturate at the `i64` bounds rather than overflow; unvalidated
/// negative quantities or prices are summed as they are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    /// Number of distinct lines.
    pub line_count: usize,
    /// Sum of quantities.
    pub item_count: i64,
    /// Sum of `quantity * unit_price`, in minor units.
    pub subtotal_minor: i64,
}

impl CartSummary {
    /// Summarize a list of merged lines.
    #[must_use]
    pub fn from_lines(lines: &[MergedCartLine]) -> Self {
        lines.iter().fold(
            Self {
                line_count: lines.len(),
                ..Self::default()
            },
            |summary, line| Self {
                item_count: summary.item_count.saturating_add(line.quantity),
                subtotal_minor: summary.subtotal_minor.saturating_add(line.line_total()),
                ..summary
            },
        )
    }

    /// Subtotal as a price in the given currency.
    #[must_use]
    pub fn subtotal(&self, currency: CurrencyCode) -> Price {
        Price::from_minor_units(self.subtotal_minor, currency)
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.line_count == 0
    }
}
