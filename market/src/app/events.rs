//! # Application Events
//!
//! Event types for async task communication between background tasks and the main thread.

use shared::{Cart, Product, ProductId, ProductQuery, TokenResponse};

use crate::core::error::Result;

/// Which view started a cart request; errors are reported there and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOrigin {
    /// Refresh after login, restore or a mode switch
    Background,
    /// Quantity stepper, remove button, or opening the cart
    CartScreen,
    /// Add button on a product card
    ProductCard(ProductId),
}

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Login completed
    LoginResult(Result<TokenResponse>),
    /// Registration and the login that follows it completed
    RegisterResult(Result<TokenResponse>),
    /// Product list received for `query`
    ProductsLoaded {
        query: ProductQuery,
        result: Result<Vec<Product>>,
    },
    /// Single product received for the negotiation screen
    ProductLoaded {
        id: ProductId,
        result: Result<Product>,
    },
    /// A cart request finished. The snapshot has already been stored on success.
    CartUpdated {
        origin: CartOrigin,
        result: Result<Cart>,
    },
    /// The scripted negotiation reply is due
    NegotiationReply { product_id: ProductId },
}
