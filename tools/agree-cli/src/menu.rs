//! Catalog dataset loading.
//!
//! The storefront ships with a built-in menu; a config file may point at
//! another TOML or JSON file with the same shape.

use agree_commerce::prelude::{Catalog, Category, Currency, Money, Product};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// The built-in menu, compiled into the binary.
const BUILTIN_MENU: &str = include_str!("../menu.toml");

/// On-disk catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuFile {
    /// Currency code for every price.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Categories in display order.
    #[serde(default)]
    pub categories: Vec<CategoryEntry>,

    /// Products in display order.
    #[serde(default)]
    pub products: Vec<ProductEntry>,
}

fn default_currency() -> String {
    Currency::default().code().to_string()
}

/// A category row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

/// A product row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: PriceValue,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub category: Option<String>,
}

/// A price written either as an exact string (`"12.50"`) or a number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Text(String),
    Number(f64),
}

impl PriceValue {
    fn to_money(&self, currency: Currency) -> Result<Money, agree_commerce::CommerceError> {
        match self {
            PriceValue::Text(text) => Money::parse(text, currency),
            PriceValue::Number(value) => Money::from_decimal(*value, currency),
        }
    }
}

impl MenuFile {
    /// Parse a menu from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML menu")
    }

    /// Read a menu file, choosing the format by extension.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read menu file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON menu: {}", path))
        } else {
            Self::from_toml(&content).with_context(|| format!("Invalid menu file: {}", path))
        }
    }

    /// Convert into a validated catalog.
    pub fn into_catalog(self) -> Result<Catalog> {
        let currency = Currency::from_code(&self.currency)
            .ok_or_else(|| anyhow!("Unsupported currency: {}", self.currency))?;

        let categories = self
            .categories
            .into_iter()
            .map(|c| Category::new(c.id, c.name, c.icon))
            .collect();

        let products = self
            .products
            .into_iter()
            .map(|p| {
                let price = p
                    .price
                    .to_money(currency)
                    .with_context(|| format!("Invalid price for product {}", p.id))?;
                let mut product = Product::new(p.id, p.name, price)
                    .with_description(p.description)
                    .with_image(p.image);
                product.popular = p.popular;
                product.category = p.category.map(Into::into);
                Ok(product)
            })
            .collect::<Result<Vec<_>>>()?;

        Catalog::new(currency, categories, products).context("Menu is inconsistent")
    }
}

/// Load the catalog named by the config, or the built-in menu.
pub fn load_catalog(path: Option<&str>) -> Result<Catalog> {
    let file = match path {
        Some(path) => MenuFile::load(path)?,
        None => MenuFile::from_toml(BUILTIN_MENU).context("Built-in menu is invalid")?,
    };
    file.into_catalog()
}
