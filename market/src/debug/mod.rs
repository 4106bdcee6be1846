//! # Logging Infrastructure
//!
//! File-based structured logging for the marketplace client.
//!
//! ## Features
//!
//! - **File-based logging**: Structured logs to `logs/market-debug.log` (daily rotation)
//! - **Stderr mirror**: Compact console output when `BEP_LOG_STDERR=1`
//! - **Panic logging**: Panics are written to the log before the default hook runs
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Initialize at app startup
//! bep_market::debug::init_logger();
//!
//! tracing::info!(endpoint = "/api/cart", duration_ms = 42, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `bep_market=info,warn`)
//! - `BEP_LOG_DIR`: Log directory (default `logs`)
//! - `BEP_LOG_STDERR`: Mirror logs to stderr (1=on)

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init as init_logger;
