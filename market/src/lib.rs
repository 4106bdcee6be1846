//! # BEP Marketplace - Library Root
//!
//! A **native desktop client** for the BEP cattle-feed marketplace: sign in, pick retail or
//! wholesale purchasing, browse and filter the catalog, manage a cart priced for the chosen
//! mode, and haggle with a (scripted) negotiation assistant.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              bep-market (this crate)                   │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe  - Immediate-mode GUI, native window    │
//! │  Tokio          - Async runtime for API calls, timers  │
//! │  Reqwest        - HTTP client                          │
//! │  tracing        - Structured logging to a daily file   │
//! └────────────────────────────────────────────────────────┘
//!                          │ HTTP/JSON (bearer token)
//!                          ▼
//!              ┌───────────────────────┐
//!              │  Marketplace API      │
//!              └───────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Application state, events, handlers and async tasks
//!   - session store, mode-scoped cart store, route guard
//!   - catalog filters with debounced search
//!   - negotiation transcript
//! - **services**: HTTP API client, JWT claims, token persistence
//! - **core**: `AppError` and the `ApiService` / `TokenStore` seams
//! - **ui**: Screens, widgets and theme
//! - **config**: Environment-driven client settings
//! - **debug**: Logger initialization
//! - **utils**: Form validation and the debouncer
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, events, handlers, tasks)
//!   │   └── core::ApiService ── services::api (HTTP requests)
//!   │
//!   └── ui (rendering)
//!       ├── screens::* (welcome, auth, mode, store, cart, negotiation)
//!       ├── widgets::* (header, product card, filters, forms)
//!       └── theme (brand colours)
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p bep-market
//! ```
//!
//! Store and handler tests run against an in-memory `ApiService` mock; the HTTP client is
//! tested against a local stub server in `tests/api_client.rs`.

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, Screen};
pub use config::ClientConfig;
pub use core::{AppError, Result};
