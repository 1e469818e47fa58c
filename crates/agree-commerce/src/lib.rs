//! Storefront domain types and logic for Agree.
//!
//! This crate holds the in-memory state model behind the storefront:
//!
//! - **Catalog**: Products and categories supplied by an external dataset
//! - **Cart**: Line items with merge-on-add semantics and totals
//! - **Checkout**: Delivery form validation and order confirmation
//!
//! Nothing here performs I/O or persists state; a cart lives exactly as long
//! as the session that owns it.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use agree_commerce::prelude::*;
//!
//! let falafel = Arc::new(Product::new(
//!     "falafel-wrap",
//!     "Falafel Wrap",
//!     Money::new(1250, Currency::MAD),
//! ));
//!
//! let mut cart = Cart::new(Currency::MAD);
//! cart.add_product(&falafel);
//! cart.add_product(&falafel);
//!
//! let form = DeliveryForm::new("Amina", "Benali", "0612345678", "12 Rue des Oliviers");
//! let confirmation = place_order(&cart, &form).unwrap();
//! assert_eq!(confirmation.order.total.display(), "DH25.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product};

    // Cart
    pub use crate::cart::{Cart, CartSummary, LineItem};

    // Checkout
    pub use crate::checkout::{
        place_order, DeliveryField, DeliveryForm, Order, OrderConfirmation, OrderLineItem,
        Screen,
    };
}
