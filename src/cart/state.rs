//! Storefront State Management
//!
//! This module owns the application state shared by every handler: the
//! catalog built once at startup and the open carts keyed by cart id.

use super::{
    helpers::{format_line_summary, get_or_create_cart_id},
    models::{Cart, CartLine, CartView, Receipt},
};
use crate::{
    catalog::{models::ProductId, Catalog},
    error::{ShopError, ShopResult},
};
use dashmap::DashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing the catalog and open carts
pub struct AppState {
    /// The process-wide product catalog.
    pub catalog: Catalog,

    /// In-memory storage for carts, keyed by cart_id.
    pub carts: DashMap<String, Cart>,

    /// Serializes checkouts so the stock check and the decrements of one
    /// checkout are not interleaved with another's.
    checkout_gate: Mutex<()>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::seeded())
    }
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            carts: DashMap::new(),
            checkout_gate: Mutex::new(()),
        }
    }

    /// Looks the product up and adds `quantity` units of it to the cart,
    /// creating the cart when needed.
    pub fn add_to_cart(
        &self,
        cart_id: Option<String>,
        product_id: ProductId,
        quantity: i64,
    ) -> ShopResult<CartView> {
        if quantity < 1 {
            return Err(ShopError::InvalidQuantity(quantity));
        }

        let item = self
            .catalog
            .find_by_id(product_id)
            .ok_or(ShopError::NotFound(product_id))?;
        if !item.is_available() {
            return Err(ShopError::Depleted(product_id));
        }

        let cart_id = get_or_create_cart_id(cart_id);
        let mut cart = self.carts.entry(cart_id.clone()).or_default();
        // Lines added here are all positive, so a total that fits keeps every line in range.
        if cart.total_quantity().checked_add(quantity).is_none() {
            return Err(ShopError::InvalidQuantity(quantity));
        }
        cart.add_item(Arc::clone(&item.product), quantity);

        debug!(cart_id = %cart_id, product_id = %product_id, quantity, "Item added to cart");
        Ok(CartView::new(cart_id, &cart))
    }

    pub fn cart_view(&self, cart_id: &str) -> ShopResult<CartView> {
        let cart = self
            .carts
            .get(cart_id)
            .ok_or_else(|| ShopError::CartNotFound(cart_id.to_string()))?;
        Ok(CartView::new(cart_id, &cart))
    }

    pub fn cart_line(&self, cart_id: &str, index: usize) -> ShopResult<CartLine> {
        let cart = self
            .carts
            .get(cart_id)
            .ok_or_else(|| ShopError::CartNotFound(cart_id.to_string()))?;
        cart.line_at(index).cloned()
    }

    /// Removes the product's line from the cart. Absent lines are ignored.
    pub fn remove_from_cart(&self, cart_id: &str, product_id: ProductId) -> ShopResult<CartView> {
        let mut cart = self
            .carts
            .get_mut(cart_id)
            .ok_or_else(|| ShopError::CartNotFound(cart_id.to_string()))?;

        if let Some(product) = cart.find_product(product_id).cloned() {
            cart.remove_line(&product);
            debug!(cart_id, product_id = %product_id, "Line removed from cart");
        }

        Ok(CartView::new(cart_id, &cart))
    }

    pub fn clear_cart(&self, cart_id: &str) -> ShopResult<CartView> {
        let mut cart = self
            .carts
            .get_mut(cart_id)
            .ok_or_else(|| ShopError::CartNotFound(cart_id.to_string()))?;
        cart.clear();

        debug!(cart_id, "Cart cleared");
        Ok(CartView::new(cart_id, &cart))
    }

    /// Takes every line's quantity out of stock and empties the cart.
    ///
    /// Nothing is decremented unless all lines pass the stock check.
    pub fn checkout(&self, cart_id: &str) -> ShopResult<Receipt> {
        let _gate = self
            .checkout_gate
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut cart = self
            .carts
            .get_mut(cart_id)
            .ok_or_else(|| ShopError::CartNotFound(cart_id.to_string()))?;

        if let Err(err) = self.verify_stock(&cart) {
            warn!(cart_id, error = %err, "Checkout rejected");
            return Err(err);
        }

        for line in cart.lines() {
            self.catalog
                .decrement_stock(line.product.id, line.quantity)?;
        }

        let receipt = Receipt {
            cart_id: cart_id.to_string(),
            lines: cart.lines().to_vec(),
            total_value: cart.total_value(),
            summary: format_line_summary(cart.lines()),
        };
        cart.clear();

        info!(cart_id, total = receipt.total_value, items = %receipt.summary, "Checkout completed");
        Ok(receipt)
    }

    fn verify_stock(&self, cart: &Cart) -> ShopResult<()> {
        if cart.is_empty() {
            return Err(ShopError::EmptyCart);
        }

        for line in cart.lines() {
            if line.quantity < 1 {
                return Err(ShopError::InvalidQuantity(line.quantity));
            }

            let id = line.product.id;
            let item = self.catalog.find_by_id(id).ok_or(ShopError::NotFound(id))?;
            if item.stock < line.quantity {
                return Err(ShopError::InsufficientStock {
                    id,
                    requested: line.quantity,
                    available: item.stock,
                });
            }
        }
        Ok(())
    }
}
