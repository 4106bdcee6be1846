//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`ApiService`, `TokenStore`)
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bep_market::core::service::{ApiService, TokenStore};
//!
//! // In production: real implementations
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(&config.api_base_url));
//! let tokens: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(&config.token_path));
//!
//! // In tests: in-memory implementations
//! let api: Arc<dyn ApiService> = Arc::new(MockApiService::new());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{ApiService, TokenStore};
