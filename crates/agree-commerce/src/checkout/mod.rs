//! Checkout module.
//!
//! Contains the delivery form, order placement, and screen navigation.

mod delivery;
mod flow;
mod order;

pub use delivery::{DeliveryField, DeliveryForm};
pub use flow::Screen;
pub use order::{place_order, Order, OrderConfirmation, OrderLineItem};
