//! Fixed product set loaded when the catalog is created.

use super::models::{CatalogItem, Product};

/// Returns the five products every storefront starts with.
pub fn default_products() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new(
            Product::new(1, "Echo Dot", "(2nd Generation) - Black", 92.50),
            10,
        ),
        CatalogItem::new(
            Product::new(
                2,
                "Anker 3ft / 0.9m Nylon Braided",
                "Tangle-Free Micro USB Cable",
                9.99,
            ),
            20,
        ),
        CatalogItem::new(
            Product::new(3, "JVC HAFX8R Headphone", "Riptidz, In-Ear", 69.99),
            30,
        ),
        CatalogItem::new(
            Product::new(4, "VTech CS6114 DECT 6.0", "Cordless Phone", 32.50),
            40,
        ),
        CatalogItem::new(Product::new(5, "NOKIA OEM BL-5J", "Cell Phone ", 895.00), 50),
    ]
}
