//! # Utility Functions
//!
//! Shared utility functions used across the marketplace client.
//!
//! ## Modules
//!
//! - **[`validation`]**: Form and filter input validation
//! - **[`debounce`]**: Frame-polled debouncing for search input
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate utilities (price formatting)
//! - [`crate::core`]: Core abstractions and error types

pub mod debounce;
pub mod validation;
