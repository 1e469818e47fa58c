//! Product types.

use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A purchasable product.
///
/// Products are supplied by the catalog dataset and never mutated by the
/// cart or checkout; they are shared by reference once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Short description for listings.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Display glyph (an emoji in the built-in menu).
    pub image: String,
    /// Featured in the "popular" strip on the home screen.
    pub popular: bool,
    /// Category this product is listed under.
    pub category: Option<CategoryId>,
}

impl Product {
    /// Create a new product with an empty description and no category.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image: String::new(),
            popular: false,
            category: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the display glyph.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Mark the product as popular.
    pub fn popular(mut self) -> Self {
        self.popular = true;
        self
    }

    /// Place the product in a category.
    pub fn in_category(mut self, category: impl Into<CategoryId>) -> Self {
        self.category = Some(category.into());
        self
    }
}
