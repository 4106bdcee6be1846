//! # Shared Marketplace Types
//!
//! Wire contract between the BEP desktop client and the marketplace HTTP API.
//! All DTOs use JSON serialization via `serde` for API communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login form, registration, token and error bodies
//!   - **[`dto::catalog`]**: Products, feed categories and catalog queries
//!   - **[`dto::cart`]**: Cart snapshots and cart mutation bodies
//!   - **[`dto::mode`]**: Retail / wholesale purchasing mode
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_price`]**: Render a rupee amount for display
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** on both sides (default serde behavior)
//! - Monetary values are [`rust_decimal::Decimal`] and accept JSON numbers or strings
//! - Product identifiers accept either integers or strings (see [`dto::catalog::ProductId`])
//!
//! ## Usage in the Client
//!
//! ```rust,no_run
//! use shared::dto::catalog::{Category, ProductQuery};
//!
//! let query = ProductQuery {
//!     search: Some("mineral".to_string()),
//!     categories: vec![Category::Dairy],
//!     ..ProductQuery::default()
//! };
//!
//! // GET /api/products?search=mineral&category=dairy
//! let pairs = query.to_query_pairs();
//! assert_eq!(pairs.len(), 2);
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library, everything here is public API
pub use dto::*;
pub use utils::*;
