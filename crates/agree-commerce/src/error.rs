//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// One or more required form fields are empty.
    #[error("please fill in all fields (missing: {})", .0.join(", "))]
    MissingField(Vec<&'static str>),

    /// An order was placed against an empty cart.
    #[error("cannot place an order with an empty cart")]
    EmptyCart,

    /// Product not found.
    #[error("product not found: {0}")]
    ProductNotFound(String),

    /// Category not found.
    #[error("category not found: {0}")]
    CategoryNotFound(String),

    /// Two catalog entries share a product id.
    #[error("duplicate product id in catalog: {0}")]
    DuplicateProduct(String),

    /// A price is below zero.
    #[error("negative price for product {0}")]
    NegativePrice(String),

    /// Currency mismatch.
    #[error("currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// A decimal amount could not be parsed.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

impl CommerceError {
    /// Check if this is a user-correctable form validation failure.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, CommerceError::MissingField(_))
    }

    /// Fields reported missing, if this is a [`CommerceError::MissingField`].
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            CommerceError::MissingField(fields) => fields,
            _ => &[],
        }
    }
}
