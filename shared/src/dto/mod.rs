//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged with the marketplace API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login form, registration, access token and error responses
//! - [`catalog`] - Products, categories and product list queries
//! - [`cart`] - Cart snapshots and add-to-cart bodies
//! - [`mode`] - Purchasing mode (retail / wholesale)
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/login
//! Content-Type: application/x-www-form-urlencoded
//!
//! username=farmer%40example.com&password=secret
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "token_type": "bearer"
//! }
//! ```
//!
//! ```text
//! GET /api/cart?mode=wholesale
//! Authorization: Bearer eyJhbGciOi...
//!
//! {
//!   "items": [
//!     { "product_id": 3, "name": "Dairy Mix 20kg", "price": 720.0,
//!       "quantity": 2, "seller_name": "Anand Feeds", "unit": "per bag" }
//!   ],
//!   "total_items": 2,
//!   "total_price": 1440.0
//! }
//! ```

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod mode;

pub use auth::*;
pub use cart::*;
pub use catalog::*;
pub use mode::*;
