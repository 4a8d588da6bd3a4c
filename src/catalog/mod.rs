//! Product Catalog Domain Module
//!
//! This module contains the catalog of purchasable products, including:
//! - Domain models (Product, CatalogItem, StockStatus)
//! - The startup product set
//! - The shared in-memory store
//! - REST API handlers

pub mod handlers;
pub mod models;
pub mod seed;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{CatalogItem, Product, ProductId, StockStatus};
pub use store::Catalog;
