//! Catalog listing.

use std::sync::Arc;

use agree_commerce::prelude::{Catalog, CategoryId, Product};
use anyhow::Result;

use super::CatalogArgs;
use crate::context::Context;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;

    let products: Vec<&Arc<Product>> = match &args.category {
        Some(id) => catalog.in_category(&CategoryId::new(id.as_str()))?,
        None => catalog.products().iter().collect(),
    };
    let products: Vec<&Arc<Product>> = products
        .into_iter()
        .filter(|p| !args.popular || p.popular)
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    let store = &ctx.config.store;
    ctx.output.header(&format!("{} - {}", store.name, store.tagline));

    if products.is_empty() {
        ctx.output.info("No products match");
        return Ok(());
    }

    print_grouped(ctx, &catalog, &products);
    Ok(())
}

/// Print products under their category headings, in catalog order.
/// Uncategorized products come last.
fn print_grouped(ctx: &Context, catalog: &Catalog, products: &[&Arc<Product>]) {
    let theme = ctx.output.theme();

    for category in catalog.categories() {
        let members: Vec<_> = products
            .iter()
            .filter(|p| p.category.as_ref() == Some(&category.id))
            .collect();
        if members.is_empty() {
            continue;
        }
        println!();
        println!("{} {}", category.icon, theme.accent().apply_to(&category.name));
        for product in members {
            print_product(ctx, product);
        }
    }

    let other: Vec<_> = products.iter().filter(|p| p.category.is_none()).collect();
    if !other.is_empty() {
        println!();
        println!("{}", theme.accent().apply_to("Other"));
        for product in other {
            print_product(ctx, product);
        }
    }
}

fn print_product(ctx: &Context, product: &Product) {
    let name = if product.popular {
        format!("{} ★", product.name)
    } else {
        product.name.clone()
    };
    ctx.output.line(
        &product.image,
        &name,
        &product.price.display(),
        Some(&format!("{}  [{}]", product.description, product.id)),
    );
}
