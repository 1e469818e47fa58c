//! Shopping cart module.
//!
//! Contains types for the cart, its line items, and the display summary.

mod cart;
mod pricing;

pub use cart::{Cart, LineItem};
pub use pricing::CartSummary;
