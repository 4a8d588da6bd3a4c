//! In-memory catalog store
//!
//! One [`Catalog`] is built at startup and shared through the application
//! state. Each entry sits behind a `DashMap` shard lock, so a single
//! `decrement_stock` call is atomic with respect to other writers.

use super::{
    models::{CatalogItem, ProductId},
    seed::default_products,
};
use crate::error::{ShopError, ShopResult};
use dashmap::DashMap;
use tracing::info;

/// Products and their stock levels, keyed by product id.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: DashMap<ProductId, CatalogItem>,
}

impl Catalog {
    /// Builds a catalog from the given items. Later duplicates of an id win.
    pub fn new(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        let entries = DashMap::new();
        for item in items {
            entries.insert(item.product.id, item);
        }
        Self { entries }
    }

    /// Builds the catalog with the fixed startup product set.
    pub fn seeded() -> Self {
        let catalog = Self::new(default_products());
        info!(products = catalog.len(), "Catalog seeded");
        catalog
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Products that still have stock, ordered by name.
    pub fn list_available(&self) -> Vec<CatalogItem> {
        let mut items: Vec<CatalogItem> = self
            .entries
            .iter()
            .filter(|entry| entry.is_available())
            .map(|entry| entry.value().clone())
            .collect();

        items.sort_by(|a, b| a.product.name.cmp(&b.product.name));
        items
    }

    /// Looks up a product by id, depleted ones included.
    pub fn find_by_id(&self, id: ProductId) -> Option<CatalogItem> {
        self.entries.get(&id).map(|entry| entry.value().clone())
    }

    /// Removes `quantity` units from the product's stock.
    ///
    /// Does not check that enough stock remains; callers do that first.
    pub fn decrement_stock(&self, id: ProductId, quantity: i64) -> ShopResult<CatalogItem> {
        let mut entry = self.entries.get_mut(&id).ok_or(ShopError::NotFound(id))?;

        if entry.take(quantity) {
            info!(product_id = %id, name = %entry.product.name, "Product sold out");
        }

        Ok(entry.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::{Product, StockStatus};

    fn names(items: &[CatalogItem]) -> Vec<&str> {
        items.iter().map(|i| i.product.name.as_str()).collect()
    }

    #[test]
    fn test_seeded_listing_is_sorted_by_name() {
        let catalog = Catalog::seeded();
        let listed = catalog.list_available();

        assert_eq!(listed.len(), 5);
        assert_eq!(
            names(&listed),
            vec![
                "Anker 3ft / 0.9m Nylon Braided",
                "Echo Dot",
                "JVC HAFX8R Headphone",
                "NOKIA OEM BL-5J",
                "VTech CS6114 DECT 6.0",
            ]
        );
    }

    #[test]
    fn test_listing_skips_products_without_stock() {
        let catalog = Catalog::new(vec![
            CatalogItem::new(Product::new(1, "Zeta", "", 1.0), 3),
            CatalogItem::new(Product::new(2, "Alpha", "", 1.0), 0),
            CatalogItem::new(Product::new(3, "Beta", "", 1.0), 1),
        ]);

        let listed = catalog.list_available();
        assert_eq!(names(&listed), vec!["Beta", "Zeta"]);
        assert!(listed.iter().all(|i| i.stock > 0));
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::seeded();

        let echo = catalog.find_by_id(ProductId(1)).expect("seeded product");
        assert_eq!(echo.product.name, "Echo Dot");
        assert_eq!(echo.stock, 10);
        assert_eq!(echo.product.unit_price, 92.50);

        assert!(catalog.find_by_id(ProductId(42)).is_none());

        let nokia = catalog.find_by_id(ProductId(5)).unwrap();
        assert_eq!(nokia.product.description, "Cell Phone ");
    }

    #[test]
    fn test_decrement_reduces_stock() {
        let catalog = Catalog::seeded();

        let updated = catalog.decrement_stock(ProductId(3), 4).unwrap();
        assert_eq!(updated.stock, 26);
        assert_eq!(updated.status, StockStatus::Active);
        assert_eq!(catalog.find_by_id(ProductId(3)).unwrap().stock, 26);
    }

    #[test]
    fn test_decrement_to_zero_depletes_product() {
        let catalog = Catalog::seeded();

        let updated = catalog.decrement_stock(ProductId(1), 10).unwrap();
        assert_eq!(updated.stock, 0);
        assert_eq!(updated.status, StockStatus::Depleted);

        let listed = catalog.list_available();
        assert_eq!(listed.len(), 4);
        assert!(listed.iter().all(|i| i.product.id != ProductId(1)));

        // Still resolvable by id.
        let echo = catalog.find_by_id(ProductId(1)).unwrap();
        assert_eq!(echo.status, StockStatus::Depleted);
    }

    #[test]
    fn test_decrement_unknown_product() {
        let catalog = Catalog::seeded();
        assert_eq!(
            catalog.decrement_stock(ProductId(99), 1),
            Err(ShopError::NotFound(ProductId(99)))
        );
    }

    #[test]
    fn test_decrement_does_not_guard_against_overdraw() {
        let catalog = Catalog::seeded();

        let updated = catalog.decrement_stock(ProductId(1), 12).unwrap();
        assert_eq!(updated.stock, -2);
        assert_eq!(updated.status, StockStatus::Depleted);
        assert!(catalog
            .list_available()
            .iter()
            .all(|i| i.product.id != ProductId(1)));
    }

    #[test]
    fn test_restock_after_overdraw_lists_product_again() {
        let catalog = Catalog::seeded();

        catalog.decrement_stock(ProductId(1), 12).unwrap();
        let restocked = catalog.decrement_stock(ProductId(1), -5).unwrap();

        assert_eq!(restocked.stock, 3);
        assert_eq!(restocked.status, StockStatus::Active);
        assert!(catalog
            .list_available()
            .iter()
            .any(|i| i.product.id == ProductId(1)));
    }

    #[test]
    fn test_concurrent_decrements_are_not_lost() {
        use std::sync::Arc;
        use std::thread;

        let catalog = Arc::new(Catalog::seeded());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let catalog = Arc::clone(&catalog);
                thread::spawn(move || {
                    for _ in 0..5 {
                        catalog.decrement_stock(ProductId(5), 1).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(catalog.find_by_id(ProductId(5)).unwrap().stock, 10);
    }
}
