//! # Shared Utility Functions
//!
//! Display helpers used by every screen that shows money.
//!
//! ## Price Formatting
//!
//! - [`format_price`] - Rupee amount with two decimals
//! - [`format_unit_price`] - Rupee amount followed by its pricing unit
//!
//! ## Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use shared::utils::format_price;
//!
//! assert_eq!(format_price(Decimal::new(72050, 2)), "₹720.50");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a rupee amount with exactly two decimals.
///
/// # Examples
///
/// ```rust
/// use rust_decimal::Decimal;
/// use shared::utils::format_price;
///
/// assert_eq!(format_price(Decimal::from(450)), "₹450.00");
/// assert_eq!(format_price(Decimal::new(12345, 3)), "₹12.35");
/// ```
pub fn format_price(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    format!("₹{}", rounded)
}

/// Format a price together with its unit, e.g. `₹720.00 per bag`.
///
/// Missing or blank units render the bare price.
pub fn format_unit_price(amount: Decimal, unit: Option<&str>) -> String {
    match unit.map(str::trim).filter(|u| !u.is_empty()) {
        Some(unit) => format!("{} {}", format_price(amount), unit),
        None => format_price(amount),
    }
}
