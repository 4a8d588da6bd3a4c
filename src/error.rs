//! Storefront error model
//!
//! Every fallible catalog, cart and checkout operation reports a
//! [`ShopError`]. The HTTP layer renders it through [`IntoResponse`].

use crate::catalog::models::ProductId;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Result type used by catalog and cart operations.
pub type ShopResult<T> = Result<T, ShopError>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShopError {
    /// No product with this id exists in the catalog.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// A cart line index outside `[0, len)`.
    #[error("cart line index {index} out of range (cart has {len} line(s))")]
    OutOfRange { index: usize, len: usize },

    #[error("insufficient stock for product {id}: requested {requested}, available {available}")]
    InsufficientStock {
        id: ProductId,
        requested: i64,
        available: i64,
    },

    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// The product exists but has no stock left.
    #[error("product {0} is sold out")]
    Depleted(ProductId),

    #[error("cart is empty")]
    EmptyCart,

    #[error("cart not found: {0}")]
    CartNotFound(String),
}

impl ShopError {
    fn status(&self) -> StatusCode {
        match self {
            ShopError::NotFound(_) | ShopError::OutOfRange { .. } | ShopError::CartNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            ShopError::InvalidQuantity(_) | ShopError::EmptyCart => StatusCode::BAD_REQUEST,
            ShopError::InsufficientStock { .. } | ShopError::Depleted(_) => StatusCode::CONFLICT,
        }
    }

    /// Stable machine-readable code for the error body.
    pub fn code(&self) -> &'static str {
        match self {
            ShopError::NotFound(_) => "product_not_found",
            ShopError::OutOfRange { .. } => "out_of_range",
            ShopError::InsufficientStock { .. } => "insufficient_stock",
            ShopError::InvalidQuantity(_) => "invalid_quantity",
            ShopError::Depleted(_) => "sold_out",
            ShopError::EmptyCart => "empty_cart",
            ShopError::CartNotFound(_) => "cart_not_found",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
}

impl IntoResponse for ShopError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorInfo {
                code: self.code(),
                message: self.to_string(),
            },
        };

        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ShopError::NotFound(ProductId(9)).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ShopError::OutOfRange { index: 3, len: 1 }.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ShopError::EmptyCart.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ShopError::Depleted(ProductId(1)).into_response().status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_messages() {
        let err = ShopError::InsufficientStock {
            id: ProductId(2),
            requested: 5,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "insufficient stock for product 2: requested 5, available 3"
        );
        assert_eq!(
            ShopError::OutOfRange { index: 4, len: 2 }.to_string(),
            "cart line index 4 out of range (cart has 2 line(s))"
        );
    }
}
