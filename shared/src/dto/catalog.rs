//! # Catalog DTOs
//!
//! Products as returned by `GET /api/products` and the query that filters them.
//! Filtering happens on the server; the client only builds the query string.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::mode::PurchaseMode;

/// Product identifier.
///
/// Relational backends hand out integers, document stores hand out strings.
/// Whatever the server sent is echoed back unchanged in cart requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(id) => write!(f, "{}", id),
            ProductId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        ProductId::Number(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId::Text(id.to_string())
    }
}

/// A catalog product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Retail price
    pub price: Decimal,
    #[serde(default)]
    pub wholesale_price: Option<Decimal>,
    /// Pricing unit, e.g. "per bag"
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub seller_name: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl Product {
    /// Price shown in the given mode. Products without a wholesale price sell at retail.
    pub fn price_for(&self, mode: PurchaseMode) -> Decimal {
        match mode {
            PurchaseMode::Retail => self.price,
            PurchaseMode::Wholesale => self.wholesale_price.unwrap_or(self.price),
        }
    }
}

/// Feed categories offered as catalog filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Dairy,
    Poultry,
    Goats,
    Sheep,
    Supplements,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::Dairy,
            Category::Poultry,
            Category::Goats,
            Category::Sheep,
            Category::Supplements,
        ]
    }

    /// Value used in the `category=` query parameter
    pub fn id(&self) -> &'static str {
        match self {
            Category::Dairy => "dairy",
            Category::Poultry => "poultry",
            Category::Goats => "goats",
            Category::Sheep => "sheep",
            Category::Supplements => "supplements",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Dairy => "Dairy Cattle",
            Category::Poultry => "Poultry",
            Category::Goats => "Goats",
            Category::Sheep => "Sheep",
            Category::Supplements => "Supplements",
        }
    }
}

/// Query for `GET /api/products`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub search: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    /// Selected categories; each one becomes its own `category=` pair
    pub categories: Vec<Category>,
}

impl ProductQuery {
    /// Build the query pairs, omitting unset filters.
    ///
    /// Order is fixed (search, min_price, max_price, then categories) so that equal
    /// queries produce identical URLs.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("min_price", min.normalize().to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("max_price", max.normalize().to_string()));
        }

        let mut categories = self.categories.clone();
        categories.sort();
        categories.dedup();
        for category in categories {
            pairs.push(("category", category.id().to_string()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_accepts_numeric_and_string_ids() {
        let numeric: Product = serde_json::from_str(
            r#"{"id": 7, "name": "Layer Mash", "price": 540.0, "seller_name": "Om Agro"}"#,
        )
        .unwrap();
        assert_eq!(numeric.id, ProductId::Number(7));
        assert_eq!(numeric.id.to_string(), "7");

        let document: Product = serde_json::from_str(
            r#"{"_id": "65f0c2", "name": "Goat Pellets", "price": "310.50", "wholesale_price": 280,
                "unit": "per 25kg bag", "description": null, "category": "goats"}"#,
        )
        .unwrap();
        assert_eq!(document.id, ProductId::Text("65f0c2".to_string()));
        assert_eq!(document.price, Decimal::new(31050, 2));
        assert_eq!(document.unit.as_deref(), Some("per 25kg bag"));
        assert_eq!(document.seller_name, "");
        assert!(document.description.is_none());
    }

    #[test]
    fn test_price_for_mode() {
        let mut product: Product = serde_json::from_str(
            r#"{"id": 1, "name": "Dairy Mix", "price": 800, "wholesale_price": 720}"#,
        )
        .unwrap();
        assert_eq!(product.price_for(PurchaseMode::Retail), Decimal::from(800));
        assert_eq!(product.price_for(PurchaseMode::Wholesale), Decimal::from(720));

        product.wholesale_price = None;
        assert_eq!(product.price_for(PurchaseMode::Wholesale), Decimal::from(800));
    }

    #[test]
    fn test_empty_query_has_no_pairs() {
        assert!(ProductQuery::default().to_query_pairs().is_empty());

        let blank_search = ProductQuery {
            search: Some("   ".to_string()),
            ..ProductQuery::default()
        };
        assert!(blank_search.to_query_pairs().is_empty());
    }

    #[test]
    fn test_query_pairs_repeat_category() {
        let query = ProductQuery {
            search: Some(" cattle feed ".to_string()),
            min_price: Some(Decimal::new(1000, 1)),
            max_price: Some(Decimal::from(900)),
            categories: vec![Category::Supplements, Category::Dairy, Category::Dairy],
        };

        assert_eq!(
            query.to_query_pairs(),
            vec![
                ("search", "cattle feed".to_string()),
                ("min_price", "100".to_string()),
                ("max_price", "900".to_string()),
                ("category", "dairy".to_string()),
                ("category", "supplements".to_string()),
            ]
        );
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::all().len(), 5);
        assert_eq!(Category::Dairy.label(), "Dairy Cattle");
        assert_eq!(Category::Goats.id(), "goats");
    }
}
