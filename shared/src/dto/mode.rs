use serde::{Deserialize, Serialize};
use std::fmt;

/// Purchasing context. Retail and wholesale carry different prices, so every
/// cart request is scoped to one mode.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseMode {
    #[default]
    Retail,
    Wholesale,
}

impl PurchaseMode {
    pub fn all() -> &'static [PurchaseMode] {
        &[PurchaseMode::Retail, PurchaseMode::Wholesale]
    }

    /// Value used in the `mode=` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseMode::Retail => "retail",
            PurchaseMode::Wholesale => "wholesale",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PurchaseMode::Retail => "Retail",
            PurchaseMode::Wholesale => "Wholesale",
        }
    }
}

impl fmt::Display for PurchaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
