//! Shopping Cart Domain Models
//!
//! This module contains the cart aggregate and the request/response shapes
//! used by the cart endpoints.

use crate::{
    catalog::models::{Product, ProductId},
    error::{ShopError, ShopResult},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// One product and how many units of it the cart holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub product: Arc<Product>,
    pub quantity: i64,
}

impl CartLine {
    pub fn value(&self) -> f64 {
        self.product.unit_price * self.quantity as f64
    }
}

/// Ordered cart lines, at most one per product id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds `quantity` units of `product`, merging into its existing line.
    ///
    /// The quantity is not validated; a negative value lowers an existing line.
    pub fn add_item(&mut self, product: Arc<Product>, quantity: i64) {
        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine { product, quantity }),
        }
    }

    /// Drops the line for `product`, if any.
    pub fn remove_line(&mut self, product: &Product) {
        self.lines.retain(|l| l.product.id != product.id);
    }

    pub fn total_value(&self) -> f64 {
        self.lines.iter().map(CartLine::value).sum()
    }

    pub fn total_quantity(&self) -> i64 {
        self.lines
            .iter()
            .fold(0, |units, l| units.saturating_add(l.quantity))
    }

    /// Average price per unit, or 0 when the cart holds no units.
    pub fn average_value(&self) -> f64 {
        let units = self.total_quantity();
        if units == 0 {
            return 0.0;
        }
        self.total_value() / units as f64
    }

    pub fn find_product(&self, id: ProductId) -> Option<&Arc<Product>> {
        self.lines
            .iter()
            .find(|l| l.product.id == id)
            .map(|l| &l.product)
    }

    pub fn line_at(&self, index: usize) -> ShopResult<&CartLine> {
        self.lines.get(index).ok_or(ShopError::OutOfRange {
            index,
            len: self.lines.len(),
        })
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

// =============================================================================
// Request / Response Models
// =============================================================================

/// Returns the default quantity (1) for add-to-cart requests
fn default_quantity() -> i64 {
    1
}

/// Body of `POST /cart/items`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartInput {
    pub product_id: ProductId,

    /// Units to add (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: i64,

    /// Optional cart identifier; a new cart is created when absent
    pub cart_id: Option<String>,
}

/// Body of `POST /checkout`
#[derive(Debug, Deserialize)]
pub struct CheckoutInput {
    #[serde(rename = "cartId")]
    pub cart_id: String,
}

/// Cart contents with derived aggregates
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub cart_id: String,
    pub lines: Vec<CartLine>,
    pub total_quantity: i64,
    pub total_value: f64,
    pub average_value: f64,
}

impl CartView {
    pub fn new(cart_id: impl Into<String>, cart: &Cart) -> Self {
        Self {
            cart_id: cart_id.into(),
            lines: cart.lines().to_vec(),
            total_quantity: cart.total_quantity(),
            total_value: cart.total_value(),
            average_value: cart.average_value(),
        }
    }
}

/// Outcome of a successful checkout
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub cart_id: String,
    pub lines: Vec<CartLine>,
    pub total_value: f64,
    pub summary: String,
}
