//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for cart identifiers and formatting.

use super::models::CartLine;
use uuid::Uuid;

/// Returns the provided `cart_id` or creates a new UUID string when `None`.
///
/// This guarantees that every cart operation works with a non-empty identifier.
pub fn get_or_create_cart_id(cart_id: Option<String>) -> String {
    cart_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x Echo Dot, 1x JVC HAFX8R Headphone"`.
pub fn format_line_summary(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|l| format!("{}x {}", l.quantity, l.product.name))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::Product;
    use std::sync::Arc;

    #[test]
    fn test_cart_id_is_kept_or_generated() {
        assert_eq!(get_or_create_cart_id(Some("abc".into())), "abc");

        let generated = get_or_create_cart_id(None);
        assert_eq!(generated.len(), 32);
        assert_eq!(get_or_create_cart_id(Some("  ".into())).len(), 32);
    }

    #[test]
    fn test_format_line_summary() {
        let lines = vec![
            CartLine {
                product: Arc::new(Product::new(1, "Echo Dot", "", 92.5)),
                quantity: 2,
            },
            CartLine {
                product: Arc::new(Product::new(3, "JVC HAFX8R Headphone", "", 69.99)),
                quantity: 1,
            },
        ];

        assert_eq!(
            format_line_summary(&lines),
            "2x Echo Dot, 1x JVC HAFX8R Headphone"
        );
        assert_eq!(format_line_summary(&[]), "");
    }
}
