//! # Cart DTOs
//!
//! Every cart endpoint answers with the full snapshot; the client never
//! recomputes `total_items` or `total_price`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::catalog::ProductId;

/// One line of the cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub product_id: ProductId,
    pub name: String,
    /// Unit price in the mode the cart was fetched for
    pub price: Decimal,
    pub quantity: u32,
    #[serde(default, alias = "seller")]
    pub seller_name: String,
    #[serde(default)]
    pub unit: Option<String>,
}

impl CartItem {
    /// Per-line display total (`price × quantity`)
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Server-computed cart snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub total_items: u32,
    #[serde(default)]
    pub total_price: Decimal,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.product_id == product_id)
    }
}

/// Body of `POST /api/cart/add`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}
