//! The catalog: an ordered, read-only product listing.

use std::collections::HashSet;
use std::sync::Arc;

use crate::catalog::{Category, Product};
use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::money::Currency;

/// An ordered list of products and categories sharing one currency.
///
/// Products are held behind [`Arc`] so cart line items can reference the
/// catalog entry itself instead of copying its price.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    currency: Currency,
    categories: Vec<Category>,
    products: Vec<Arc<Product>>,
}

impl Catalog {
    /// Build a catalog, checking that it is internally consistent.
    ///
    /// Returns an error if:
    /// - Two products share an id
    /// - A product is priced below zero or in another currency
    /// - A product references a category that is not listed
    pub fn new(
        currency: Currency,
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> Result<Self, CommerceError> {
        let category_ids: HashSet<&CategoryId> = categories.iter().map(|c| &c.id).collect();
        let mut seen: HashSet<&ProductId> = HashSet::with_capacity(products.len());

        for product in &products {
            if !seen.insert(&product.id) {
                return Err(CommerceError::DuplicateProduct(product.id.to_string()));
            }
            if product.price.currency != currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: product.price.currency.code().to_string(),
                });
            }
            if product.price.is_negative() {
                return Err(CommerceError::NegativePrice(product.id.to_string()));
            }
            if let Some(category) = &product.category {
                if !category_ids.contains(category) {
                    return Err(CommerceError::CategoryNotFound(category.to_string()));
                }
            }
        }

        tracing::debug!(
            products = products.len(),
            categories = categories.len(),
            currency = %currency,
            "catalog loaded"
        );

        Ok(Self {
            currency,
            categories,
            products: products.into_iter().map(Arc::new).collect(),
        })
    }

    /// Currency every product is priced in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// All categories in catalog order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Arc<Product>> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by id, failing if it is not listed.
    pub fn require(&self, id: &ProductId) -> Result<&Arc<Product>, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Products flagged as popular, in catalog order.
    pub fn popular(&self) -> impl Iterator<Item = &Arc<Product>> {
        self.products.iter().filter(|p| p.popular)
    }

    /// Products listed under a category.
    pub fn in_category(&self, id: &CategoryId) -> Result<Vec<&Arc<Product>>, CommerceError> {
        if !self.categories.iter().any(|c| &c.id == id) {
            return Err(CommerceError::CategoryNotFound(id.to_string()));
        }
        Ok(self
            .products
            .iter()
            .filter(|p| p.category.as_ref() == Some(id))
            .collect())
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog lists no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn mad(cents: i64) -> Money {
        Money::new(cents, Currency::MAD)
    }

    fn sample() -> Catalog {
        Catalog::new(
            Currency::MAD,
            vec![
                Category::new("bowls", "Bowls", "\u{1f957}"),
                Category::new("drinks", "Drinks", "\u{1f964}"),
            ],
            vec![
                Product::new("buddha-bowl", "Buddha Bowl", mad(6500))
                    .popular()
                    .in_category("bowls"),
                Product::new("mint-tea", "Mint Tea", mad(1500)).in_category("drinks"),
                Product::new("falafel-wrap", "Falafel Wrap", mad(1250)).popular(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = sample();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.get(&ProductId::new("mint-tea")).is_some());
        assert!(catalog.get(&ProductId::new("pizza")).is_none());
        assert_eq!(
            catalog.require(&ProductId::new("pizza")),
            Err(CommerceError::ProductNotFound("pizza".to_string()))
        );
    }

    #[test]
    fn test_popular_keeps_catalog_order() {
        let catalog = sample();
        let ids: Vec<&str> = catalog.popular().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["buddha-bowl", "falafel-wrap"]);
    }

    #[test]
    fn test_in_category() {
        let catalog = sample();
        let drinks = catalog.in_category(&CategoryId::new("drinks")).unwrap();
        assert_eq!(drinks.len(), 1);
        assert_eq!(drinks[0].name, "Mint Tea");
        assert!(catalog.in_category(&CategoryId::new("desserts")).is_err());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = Catalog::new(
            Currency::MAD,
            vec![],
            vec![
                Product::new("p1", "One", mad(100)),
                Product::new("p1", "Again", mad(200)),
            ],
        );
        assert_eq!(result, Err(CommerceError::DuplicateProduct("p1".to_string())));
    }

    #[test]
    fn test_rejects_foreign_currency_and_negative_prices() {
        let foreign = Catalog::new(
            Currency::MAD,
            vec![],
            vec![Product::new("p1", "One", Money::new(100, Currency::USD))],
        );
        assert!(matches!(foreign, Err(CommerceError::CurrencyMismatch { .. })));

        let negative = Catalog::new(Currency::MAD, vec![], vec![Product::new("p1", "One", mad(-1))]);
        assert_eq!(negative, Err(CommerceError::NegativePrice("p1".to_string())));
    }

    #[test]
    fn test_rejects_unknown_category() {
        let result = Catalog::new(
            Currency::MAD,
            vec![],
            vec![Product::new("p1", "One", mad(100)).in_category("ghost")],
        );
        assert_eq!(result, Err(CommerceError::CategoryNotFound("ghost".to_string())));
    }
}
