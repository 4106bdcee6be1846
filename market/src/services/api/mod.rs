//! # Marketplace API Client Module
//!
//! HTTP client for the marketplace API: authentication, catalog and cart.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct, response decoding, ApiService impl
//! ├── auth.rs     - Login (form) and registration (JSON)
//! ├── catalog.rs  - Product listing and lookup
//! └── cart.rs     - Mode-scoped cart snapshot endpoints
//! ```
//!
//! ## Errors
//!
//! Every call returns [`crate::core::error::AppError::Api`] on failure, carrying the
//! server's `detail` message when the body has one and a generic per-call message
//! otherwise. Transport failures read `Network error: ...`.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod client;

pub use client::ApiClient;
