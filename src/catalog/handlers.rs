//! REST API handlers for the product catalog

use super::models::{CatalogItem, ProductId};
use crate::{cart::state::SharedState, error::ShopError};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

/// Creates routes for catalog browsing
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product))
}

/// Endpoint: GET /products
/// Lists products that are in stock, sorted by name.
async fn list_products(State(state): State<SharedState>) -> Json<Vec<CatalogItem>> {
    Json(state.catalog.list_available())
}

/// Endpoint: GET /products/:id
async fn get_product(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
) -> Result<Json<CatalogItem>, ShopError> {
    let id = ProductId(id);
    state
        .catalog
        .find_by_id(id)
        .map(Json)
        .ok_or(ShopError::NotFound(id))
}
