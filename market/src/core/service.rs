//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.
//!
//! [`ApiService`] is the marketplace HTTP API; [`TokenStore`] is wherever the access
//! token survives a restart. Production wires in [`crate::services::api::ApiClient`] and
//! [`crate::services::token_store::FileTokenStore`]; tests swap in in-memory versions.

use async_trait::async_trait;
use shared::{Cart, Product, ProductId, ProductQuery, PurchaseMode, RegisterRequest, TokenResponse};

use crate::core::error::Result;

/// Trait for marketplace API operations
///
/// Every cart operation answers with the complete server snapshot for `mode`.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Exchange credentials (email or phone, password) for an access token
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse>;

    /// Create an account. Callers log in afterwards with the same credentials.
    async fn register(&self, request: &RegisterRequest) -> Result<()>;

    /// List products matching `query`. Public, no token required.
    async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>>;

    /// Fetch a single product
    async fn get_product(&self, token: &str, id: &ProductId) -> Result<Product>;

    async fn get_cart(&self, token: &str, mode: PurchaseMode) -> Result<Cart>;

    async fn add_to_cart(
        &self,
        token: &str,
        product_id: &ProductId,
        quantity: u32,
        mode: PurchaseMode,
    ) -> Result<Cart>;

    async fn remove_from_cart(&self, token: &str, product_id: &ProductId, mode: PurchaseMode) -> Result<Cart>;

    /// Set the quantity of an existing line
    async fn update_cart_item(
        &self,
        token: &str,
        product_id: &ProductId,
        quantity: u32,
        mode: PurchaseMode,
    ) -> Result<Cart>;
}

/// Persistence for the access token.
///
/// Only the token is stored; identity is always re-derived from it.
pub trait TokenStore: Send + Sync + std::fmt::Debug {
    /// The stored token, or `None` when nothing has been saved
    fn load(&self) -> Result<Option<String>>;

    fn save(&self, token: &str) -> Result<()>;

    /// Forget the stored token. Clearing an empty store is not an error.
    fn clear(&self) -> Result<()>;
}
