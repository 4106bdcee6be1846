//! # Catalog Endpoints
//!
//! Product listing (public) and single product lookup (authenticated).

use shared::{Product, ProductId, ProductQuery};

use super::client::{network_error, read_json, ApiClient};
use crate::core::error::Result;

/// List products matching the query. Filtering happens server-side.
#[tracing::instrument(skip(client))]
pub async fn list_products(client: &ApiClient, query: &ProductQuery) -> Result<Vec<Product>> {
    let start = std::time::Instant::now();

    let response = client
        .client
        .get(client.url("/api/products"))
        .query(&query.to_query_pairs())
        .send()
        .await
        .map_err(network_error)?;

    let result = read_json::<Vec<Product>>(response, "Failed to fetch products").await;
    if let Ok(ref products) = result {
        tracing::debug!(
            duration_ms = start.elapsed().as_millis(),
            product_count = products.len(),
            "Products fetched"
        );
    }
    result
}

#[tracing::instrument(skip(client, token), fields(product_id = %id))]
pub async fn get_product(client: &ApiClient, token: &str, id: &ProductId) -> Result<Product> {
    let response = client
        .client
        .get(client.product_url("/api/products", id)?)
        .bearer_auth(token)
        .send()
        .await
        .map_err(network_error)?;

    read_json::<Product>(response, "Product not found").await
}
