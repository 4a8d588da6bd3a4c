//! Storefront Library
//!
//! An in-memory product catalog and shopping cart, served over a small
//! JSON HTTP API.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod error;

// Infrastructure
pub mod config;
pub mod router;
pub mod telemetry;
