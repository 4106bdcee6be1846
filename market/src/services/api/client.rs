//! # API Client
//!
//! Main HTTP client for marketplace API communication.

use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use shared::{Cart, ErrorResponse, Product, ProductId, ProductQuery, PurchaseMode, RegisterRequest, TokenResponse};

use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;

/// HTTP client for the marketplace API.
///
/// No request timeout is configured: a call either answers or fails at the transport
/// level. The underlying `reqwest::Client` pools connections and is cheap to share.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the API at `base_url` (e.g. `http://localhost:8000`).
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .user_agent(concat!("bep-market/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/api/cart`.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// URL of one product under `path`, e.g. `/api/cart/item/{id}`. The id is
    /// percent-encoded as a single path segment.
    pub(crate) fn product_url(&self, path: &str, id: &ProductId) -> Result<Url> {
        let mut url = Url::parse(&self.url(path))
            .map_err(|e| AppError::Api(format!("Invalid API URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| AppError::Api(format!("Invalid API URL: {}", self.base_url)))?
            .push(&id.to_string());
        Ok(url)
    }
}

/// Decode a successful body as `T`, or turn a failure body into an [`AppError::Api`].
///
/// The server's `detail` wins when present; otherwise `fallback` is used.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        return response.json::<T>().await.map_err(|e| {
            tracing::error!(error = %e, "Response parse error");
            AppError::Api(format!("{}: unexpected response", fallback))
        });
    }

    Err(AppError::Api(read_error(response, fallback).await))
}

/// Like [`read_json`] for endpoints whose success body is not used.
pub(crate) async fn read_empty(response: Response, fallback: &str) -> Result<()> {
    if response.status().is_success() {
        return Ok(());
    }
    Err(AppError::Api(read_error(response, fallback).await))
}

async fn read_error(response: Response, fallback: &str) -> String {
    let status = response.status();
    let message = response
        .json::<ErrorResponse>()
        .await
        .ok()
        .and_then(|body| body.message())
        .unwrap_or_else(|| fallback.to_string());

    tracing::warn!(status = status.as_u16(), error = %message, "API request failed");
    message
}

/// Map a transport failure, logging it once.
pub(crate) fn network_error(e: reqwest::Error) -> AppError {
    tracing::error!(error = %e, "Network error");
    AppError::from(e)
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse> {
        super::auth::login(self, username, password).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<()> {
        super::auth::register(self, request).await
    }

    async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>> {
        super::catalog::list_products(self, query).await
    }

    async fn get_product(&self, token: &str, id: &ProductId) -> Result<Product> {
        super::catalog::get_product(self, token, id).await
    }

    async fn get_cart(&self, token: &str, mode: PurchaseMode) -> Result<Cart> {
        super::cart::get_cart(self, token, mode).await
    }

    async fn add_to_cart(
        &self,
        token: &str,
        product_id: &ProductId,
        quantity: u32,
        mode: PurchaseMode,
    ) -> Result<Cart> {
        super::cart::add_to_cart(self, token, product_id, quantity, mode).await
    }

    async fn remove_from_cart(&self, token: &str, product_id: &ProductId, mode: PurchaseMode) -> Result<Cart> {
        super::cart::remove_from_cart(self, token, product_id, mode).await
    }

    async fn update_cart_item(
        &self,
        token: &str,
        product_id: &ProductId,
        quantity: u32,
        mode: PurchaseMode,
    ) -> Result<Cart> {
        super::cart::update_cart_item(self, token, product_id, quantity, mode).await
    }
}
