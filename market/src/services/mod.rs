//! # Services Module
//!
//! External integrations for the marketplace client.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! ├── api/            - Marketplace HTTP API client (auth, catalog, cart)
//! ├── jwt.rs          - Identity claims decoded from the access token
//! └── token_store.rs  - Access token persistence (JSON file)
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               Marketplace client             │
//! │                                              │
//! │  ┌──────────────┐      ┌─────────────────┐   │
//! │  │  ApiClient   │      │ FileTokenStore  │   │
//! │  └──────┬───────┘      └────────┬────────┘   │
//! └─────────┼───────────────────────┼────────────┘
//!           │ HTTP/JSON             │ fs
//!           ▼                       ▼
//! ┌──────────────────────┐   ┌────────────────────┐
//! │  Marketplace API     │   │  bep-session.json  │
//! │  /api/login          │   └────────────────────┘
//! │  /api/register       │
//! │  /api/products       │
//! │  /api/cart           │
//! └──────────────────────┘
//! ```
//!
//! ## Thread Safety
//!
//! `ApiClient` wraps a `reqwest::Client` (internally pooled and thread-safe) and is
//! shared across tasks as `Arc<dyn ApiService>`. Token store calls are synchronous and
//! only made from the UI thread.

pub mod api;
pub mod jwt;
pub mod token_store;

pub use api::ApiClient;
pub use jwt::{decode_claims, UserClaims};
pub use token_store::FileTokenStore;
