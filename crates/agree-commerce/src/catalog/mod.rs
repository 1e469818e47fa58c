//! Product catalog module.
//!
//! Contains types for products, categories, and the catalog listing.

mod catalog;
mod category;
mod product;

pub use catalog::Catalog;
pub use category::Category;
pub use product::Product;
