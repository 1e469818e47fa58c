//! Cart and line item types.

use std::sync::Arc;

use crate::cart::CartSummary;
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::Serialize;

/// A shopping cart.
///
/// Holds at most one line item per product; adding a product that is
/// already in the cart bumps its quantity instead. Products are expected to
/// come from a single [`Catalog`](crate::catalog::Catalog) priced in the
/// cart's currency.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Cart {
    /// Cart currency.
    currency: Currency,
    /// Items in the cart, in the order they were first added.
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            items: Vec::new(),
        }
    }

    /// Add one unit of a product to the cart.
    ///
    /// Merges into the existing line item for the same product id, otherwise
    /// appends a new line item with quantity 1. Returns the line item's
    /// quantity after the add.
    pub fn add_product(&mut self, product: &Arc<Product>) -> u32 {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            tracing::debug!(product = %product.id, quantity = existing.quantity, "cart line merged");
            return existing.quantity;
        }

        self.items.push(LineItem {
            product: Arc::clone(product),
            quantity: 1,
        });
        tracing::debug!(product = %product.id, lines = self.items.len(), "cart line added");
        1
    }

    /// Sum of `price * quantity` over every line item.
    ///
    /// Zero for an empty cart. Reads prices from the referenced products each
    /// time it is called.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(self.currency), |acc, item| {
                acc.saturating_add(&item.subtotal())
            })
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get number of line items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Quantity held for a product, zero if absent.
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.items
            .iter()
            .find(|i| &i.product.id == product_id)
            .map(|i| i.quantity)
            .unwrap_or(0)
    }

    /// Cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Counts and total for display.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            unique_items: self.unique_item_count(),
            item_count: self.item_count(),
            total: self.total(),
        }
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineItem {
    /// Product being purchased, shared with the catalog.
    product: Arc<Product>,
    /// Quantity, never zero.
    quantity: u32,
}

impl LineItem {
    /// The referenced product.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Current unit price of the referenced product.
    pub fn unit_price(&self) -> Money {
        self.product.price
    }

    /// Unit price times quantity.
    pub fn subtotal(&self) -> Money {
        self.unit_price().times(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, cents: i64) -> Arc<Product> {
        Arc::new(Product::new(id, id.to_uppercase(), Money::new(cents, Currency::MAD)))
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new(Currency::MAD);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero(Currency::MAD));
        assert_eq!(cart.total().display_amount(), "0.00");
    }

    #[test]
    fn test_add_product() {
        let mut cart = Cart::new(Currency::MAD);
        assert_eq!(cart.add_product(&product("p1", 1000)), 1);
        assert!(!cart.is_empty());
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_add_same_product_merges() {
        let mut cart = Cart::new(Currency::MAD);
        let p1 = product("p1", 1000);

        for expected in 1..=5 {
            assert_eq!(cart.add_product(&p1), expected);
        }

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.items()[0].quantity(), 5);
        assert_eq!(cart.quantity_of(&ProductId::new("p1")), 5);
    }

    #[test]
    fn test_merge_is_by_identity_not_instance() {
        let mut cart = Cart::new(Currency::MAD);
        cart.add_product(&product("p1", 1000));
        cart.add_product(&product("p1", 1000));
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.quantity_of(&ProductId::new("p1")), 2);
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let mut cart = Cart::new(Currency::MAD);
        let a = product("a", 100);
        let b = product("b", 200);
        cart.add_product(&b);
        cart.add_product(&a);
        cart.add_product(&b);

        let ids: Vec<&str> = cart.items().iter().map(|i| i.product().id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_total() {
        let mut cart = Cart::new(Currency::MAD);
        let bowl = product("bowl", 1250);
        let tea = product("tea", 500);
        cart.add_product(&bowl);
        cart.add_product(&bowl);
        cart.add_product(&tea);

        let total = cart.total();
        assert_eq!(total.amount_cents, 3000);
        assert_eq!(total.display_amount(), "30.00");
        assert_eq!(cart.items()[0].subtotal().amount_cents, 2500);
    }

    #[test]
    fn test_total_is_idempotent() {
        let mut cart = Cart::new(Currency::MAD);
        cart.add_product(&product("p1", 999));
        assert_eq!(cart.total(), cart.total());
    }

    #[test]
    fn test_quantity_of_missing_product() {
        let cart = Cart::new(Currency::MAD);
        assert_eq!(cart.quantity_of(&ProductId::new("nope")), 0);
    }

    #[test]
    fn test_summary() {
        let mut cart = Cart::new(Currency::MAD);
        let p1 = product("p1", 700);
        cart.add_product(&p1);
        cart.add_product(&p1);
        cart.add_product(&product("p2", 300));

        let summary = cart.summary();
        assert_eq!(summary.unique_items, 2);
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.total.amount_cents, 1700);
    }
}
