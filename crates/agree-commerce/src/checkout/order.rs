//! Order placement and confirmation.

use crate::cart::{Cart, LineItem};
use crate::checkout::{DeliveryForm, Screen};
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId};
use crate::money::{Currency, Money};
use serde::Serialize;

/// A line of an order, copied out of the cart when the order is placed.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderLineItem {
    /// Product ID.
    pub product_id: ProductId,
    /// Product name at order time.
    pub name: String,
    /// Display glyph at order time.
    pub image: String,
    /// Unit price at order time.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// Unit price times quantity.
    pub subtotal: Money,
}

impl From<&LineItem> for OrderLineItem {
    fn from(item: &LineItem) -> Self {
        let product = item.product();
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            unit_price: item.unit_price(),
            quantity: item.quantity(),
            subtotal: item.subtotal(),
        }
    }
}

/// A placed order.
///
/// Orders are not stored anywhere; they exist to produce a confirmation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// "First Last" from the delivery form.
    pub customer_name: String,
    /// Delivery phone number.
    pub phone: String,
    /// Delivery address.
    pub address: String,
    /// Snapshot of the cart's line items.
    pub line_items: Vec<OrderLineItem>,
    /// Cart total at order time.
    pub total: Money,
    /// Order currency.
    pub currency: Currency,
    /// Unix timestamp of placement.
    pub placed_at: i64,
}

impl Order {
    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.line_items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

/// What the checkout screen shows after a successful order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderConfirmation {
    /// The order that was placed.
    pub order: Order,
    /// Message shown to the customer.
    pub message: String,
    /// Screen to return to once the message is dismissed.
    pub next_screen: Screen,
}

/// Place an order for the cart's contents.
///
/// Returns an error if:
/// - The cart is empty
/// - Any delivery field is empty
///
/// The cart is read, never modified.
pub fn place_order(cart: &Cart, form: &DeliveryForm) -> Result<OrderConfirmation, CommerceError> {
    if cart.is_empty() {
        return Err(CommerceError::EmptyCart);
    }
    form.validate()?;

    let total = cart.total();
    let order = Order {
        id: OrderId::generate(),
        customer_name: form.full_name(),
        phone: form.phone.clone(),
        address: form.address.clone(),
        line_items: cart.items().iter().map(OrderLineItem::from).collect(),
        total,
        currency: cart.currency(),
        placed_at: current_timestamp(),
    };

    tracing::info!(
        order = %order.id,
        lines = order.line_items.len(),
        total = %order.total,
        "order placed"
    );

    let message = format!(
        "Thank you {}! Your order of {} will be delivered soon.",
        order.customer_name,
        total.display()
    );

    Ok(OrderConfirmation {
        order,
        message,
        next_screen: Screen::Home,
    })
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use std::sync::Arc;

    fn filled_cart() -> Cart {
        let bowl = Arc::new(Product::new("bowl", "Buddha Bowl", Money::new(1250, Currency::MAD)));
        let tea = Arc::new(Product::new("tea", "Mint Tea", Money::new(500, Currency::MAD)));
        let mut cart = Cart::new(Currency::MAD);
        cart.add_product(&bowl);
        cart.add_product(&bowl);
        cart.add_product(&tea);
        cart
    }

    fn filled_form() -> DeliveryForm {
        DeliveryForm::new("Amina", "Benali", "0612345678", "12 Rue des Oliviers")
    }

    #[test]
    fn test_place_order() {
        let cart = filled_cart();
        let confirmation = place_order(&cart, &filled_form()).unwrap();

        assert_eq!(confirmation.order.customer_name, "Amina Benali");
        assert_eq!(confirmation.order.total.amount_cents, 3000);
        assert_eq!(confirmation.order.line_items.len(), 2);
        assert_eq!(confirmation.order.item_count(), 3);
        assert_eq!(confirmation.next_screen, Screen::Home);
        assert_eq!(
            confirmation.message,
            "Thank you Amina Benali! Your order of DH30.00 will be delivered soon."
        );
    }

    #[test]
    fn test_order_snapshot_matches_cart() {
        let cart = filled_cart();
        let order = place_order(&cart, &filled_form()).unwrap().order;

        let first = &order.line_items[0];
        assert_eq!(first.product_id, ProductId::new("bowl"));
        assert_eq!(first.quantity, 2);
        assert_eq!(first.subtotal.amount_cents, 2500);
    }

    #[test]
    fn test_missing_address_leaves_cart_untouched() {
        let cart = filled_cart();
        let before = cart.clone();
        let mut form = filled_form();
        form.address.clear();

        let err = place_order(&cart, &form).unwrap_err();
        assert_eq!(err, CommerceError::MissingField(vec!["delivery address"]));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_empty_cart_rejected() {
        let cart = Cart::new(Currency::MAD);
        assert_eq!(
            place_order(&cart, &filled_form()).unwrap_err(),
            CommerceError::EmptyCart
        );
    }
}
