//! REST API handlers for shopping cart operations
//!
//! This module implements HTTP endpoints for adding, inspecting and
//! removing cart lines, and for checkout.

use super::{models::*, state::SharedState};
use crate::{catalog::models::ProductId, error::ShopError};
use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart/items", post(add_to_cart))
        .route("/cart/:cart_id", get(get_cart).delete(clear_cart))
        .route("/cart/:cart_id/lines/:index", get(get_cart_line))
        .route("/cart/:cart_id/items/:product_id", delete(remove_line))
        .route("/checkout", post(checkout))
}

/// Endpoint: POST /cart/items
/// Adds units of a catalog product to a cart, creating the cart if needed.
async fn add_to_cart(
    State(state): State<SharedState>,
    Json(payload): Json<AddToCartInput>,
) -> Result<Json<CartView>, ShopError> {
    state
        .add_to_cart(payload.cart_id, payload.product_id, payload.quantity)
        .map(Json)
}

/// Endpoint: GET /cart/:cart_id
async fn get_cart(
    State(state): State<SharedState>,
    Path(cart_id): Path<String>,
) -> Result<Json<CartView>, ShopError> {
    state.cart_view(&cart_id).map(Json)
}

/// Endpoint: GET /cart/:cart_id/lines/:index
async fn get_cart_line(
    State(state): State<SharedState>,
    Path((cart_id, index)): Path<(String, usize)>,
) -> Result<Json<CartLine>, ShopError> {
    state.cart_line(&cart_id, index).map(Json)
}

/// Endpoint: DELETE /cart/:cart_id/items/:product_id
async fn remove_line(
    State(state): State<SharedState>,
    Path((cart_id, product_id)): Path<(String, u32)>,
) -> Result<Json<CartView>, ShopError> {
    state
        .remove_from_cart(&cart_id, ProductId(product_id))
        .map(Json)
}

/// Endpoint: DELETE /cart/:cart_id
async fn clear_cart(
    State(state): State<SharedState>,
    Path(cart_id): Path<String>,
) -> Result<Json<CartView>, ShopError> {
    state.clear_cart(&cart_id).map(Json)
}

/// Endpoint: POST /checkout
/// Takes the cart's quantities out of stock and empties the cart.
async fn checkout(
    State(state): State<SharedState>,
    Json(payload): Json<CheckoutInput>,
) -> Result<Json<Receipt>, ShopError> {
    state.checkout(&payload.cart_id).map(Json)
}
