//! Cart summary for display.

use crate::money::Money;
use serde::Serialize;

/// Counts and total derived from a cart at a point in time.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CartSummary {
    /// Number of line items (the cart badge count).
    pub unique_items: usize,
    /// Sum of quantities.
    pub item_count: u64,
    /// Sum of line subtotals.
    pub total: Money,
}

impl CartSummary {
    /// Badge text for the cart button, `None` when the cart is empty.
    pub fn badge(&self) -> Option<String> {
        (self.unique_items > 0).then(|| self.unique_items.to_string())
    }
}
