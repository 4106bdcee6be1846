//! Validation utilities for user input
//!
//! Credentials are only checked for presence here. Format rules (what counts as a valid
//! username or phone number) belong to the server.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::core::error::{AppError, Result};

/// Validate that a field is not blank
pub fn validate_required(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Parse a price filter field. Blank input means "no bound".
pub fn parse_price_input(input: &str) -> std::result::Result<Option<Decimal>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let value = Decimal::from_str(input).map_err(|_| "Enter a number".to_string())?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err("Price cannot be negative".to_string());
    }
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(validate_required("Ravi", "Full name").is_ok());
        assert_eq!(
            validate_required("   ", "Full name"),
            Err(AppError::Validation("Full name is required".to_string()))
        );
    }

    #[test]
    fn test_required_accepts_any_identifier_shape() {
        for identifier in ["ravi_kumar", "98765 43210", "+91-9876543210", "farmer@example.com"] {
            assert!(validate_required(identifier, "Email or phone number").is_ok(), "{}", identifier);
        }
    }

    #[test]
    fn test_price_input() {
        assert_eq!(parse_price_input(""), Ok(None));
        assert_eq!(parse_price_input(" 250 "), Ok(Some(Decimal::from(250))));
        assert_eq!(parse_price_input("99.5"), Ok(Some(Decimal::new(995, 1))));
        assert_eq!(parse_price_input("0"), Ok(Some(Decimal::ZERO)));
        assert!(parse_price_input("abc").is_err());
        assert_eq!(parse_price_input("-5"), Err("Price cannot be negative".to_string()));
    }
}
