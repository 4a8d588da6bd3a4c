//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (Cart, CartLine, inputs, responses)
//! - Business logic helpers (cart ids, formatting)
//! - Application state and checkout
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{Cart, CartLine};
pub use state::{AppState, SharedState};
