//! Catalog Domain Models
//!
//! Product data is immutable once seeded and shared through `Arc<Product>`,
//! so carts can point at the catalog's products without copying them. Stock
//! levels live next to the product in [`CatalogItem`].

use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

// =============================================================================
// Identifiers
// =============================================================================

/// Catalog product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// Catalog Domain Models
// =============================================================================

/// A purchasable product.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Price of a single unit. No currency or rounding policy applies.
    pub unit_price: f64,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        unit_price: f64,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            description: description.into(),
            unit_price,
        }
    }
}

/// Stock lifecycle of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Active,
    /// Stock reached zero. Still resolvable by id, never listed.
    Depleted,
}

/// A product together with its current stock level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogItem {
    #[serde(flatten)]
    pub product: Arc<Product>,
    pub stock: i64,
    pub status: StockStatus,
}

impl CatalogItem {
    pub fn new(product: Product, stock: i64) -> Self {
        let status = if stock > 0 {
            StockStatus::Active
        } else {
            StockStatus::Depleted
        };

        Self {
            product: Arc::new(product),
            stock,
            status,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == StockStatus::Active
    }

    /// Subtracts `quantity` and recomputes the status from the new stock.
    ///
    /// A negative `quantity` restocks, which moves a depleted product back to
    /// `Active` once stock is above zero again. Returns `true` when this call
    /// performed the `Active -> Depleted` transition.
    pub(crate) fn take(&mut self, quantity: i64) -> bool {
        let was_active = self.status == StockStatus::Active;
        self.stock = self.stock.saturating_sub(quantity);
        self.status = if self.stock > 0 {
            StockStatus::Active
        } else {
            StockStatus::Depleted
        };

        was_active && self.status == StockStatus::Depleted
    }
}
