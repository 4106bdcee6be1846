//! # Common Error Types
//!
//! Consolidated error handling for the marketplace client.
//!
//! ## Error Categories
//!
//! - **Api**: anything that went wrong talking to the marketplace API (network, HTTP
//!   status, unreadable body). The message is already human-readable: the server's
//!   `detail` when it sent one, otherwise a per-call fallback such as "Failed to add item".
//! - **Session**: no session, or an access token that cannot be decoded
//! - **Storage**: the persisted token file could not be read or written
//! - **Validation**: form input rejected before any request was made
//!
//! Views display `AppError::message()`, never the `Display` form with its category prefix.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use bep_market::core::error::AppError;
//!
//! fn validate_quantity(quantity: u32) -> Result<u32, AppError> {
//!     if quantity == 0 {
//!         return Err(AppError::Validation("Quantity must be at least 1".to_string()));
//!     }
//!     Ok(quantity)
//! }
//! ```

use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Network or HTTP failure talking to the marketplace API.
    ///
    /// ```rust
    /// use bep_market::core::error::AppError;
    ///
    /// let err = AppError::Api("Insufficient stock".to_string());
    /// assert_eq!(err.to_string(), "API error: Insufficient stock");
    /// assert_eq!(err.message(), "Insufficient stock");
    /// ```
    #[error("API error: {0}")]
    Api(String),

    /// Missing session or undecodable access token.
    #[error("Session error: {0}")]
    Session(String),

    /// Token persistence failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Input validation failure.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// The message shown to the user, without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            AppError::Api(msg)
            | AppError::Session(msg)
            | AppError::Storage(msg)
            | AppError::Validation(msg) => msg,
        }
    }

    pub fn is_api(&self) -> bool {
        matches!(self, AppError::Api(_))
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Api(format!("Network error: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_has_category_prefix() {
        assert_eq!(AppError::Api("boom".into()).to_string(), "API error: boom");
        assert_eq!(AppError::Session("gone".into()).to_string(), "Session error: gone");
        assert_eq!(AppError::Storage("disk".into()).to_string(), "Storage error: disk");
        assert_eq!(AppError::Validation("bad".into()).to_string(), "Validation error: bad");
    }

    #[test]
    fn test_message_strips_prefix() {
        assert_eq!(AppError::Api("Failed to add item".into()).message(), "Failed to add item");
        assert!(AppError::Api(String::new()).is_api());
        assert!(!AppError::Validation(String::new()).is_api());
    }

    #[test]
    fn test_io_error_is_storage() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err, AppError::Storage("denied".to_string()));
    }
}
