//! # Cart Endpoints
//!
//! Every call is scoped to a purchasing mode and answers with the full cart snapshot.

use shared::{AddToCartRequest, Cart, ProductId, PurchaseMode};

use super::client::{network_error, read_json, ApiClient};
use crate::core::error::Result;

#[tracing::instrument(skip(client, token))]
pub async fn get_cart(client: &ApiClient, token: &str, mode: PurchaseMode) -> Result<Cart> {
    let start = std::time::Instant::now();

    let response = client
        .client
        .get(client.url("/api/cart"))
        .query(&[("mode", mode.as_str())])
        .bearer_auth(token)
        .send()
        .await
        .map_err(network_error)?;

    let result = read_json::<Cart>(response, "Failed to fetch cart").await;
    if let Ok(ref cart) = result {
        tracing::debug!(
            duration_ms = start.elapsed().as_millis(),
            total_items = cart.total_items,
            "Cart fetched"
        );
    }
    result
}

#[tracing::instrument(skip(client, token), fields(product_id = %product_id))]
pub async fn add_to_cart(
    client: &ApiClient,
    token: &str,
    product_id: &ProductId,
    quantity: u32,
    mode: PurchaseMode,
) -> Result<Cart> {
    let body = AddToCartRequest {
        product_id: product_id.clone(),
        quantity,
    };

    let response = client
        .client
        .post(client.url("/api/cart/add"))
        .query(&[("mode", mode.as_str())])
        .bearer_auth(token)
        .json(&body)
        .send()
        .await
        .map_err(network_error)?;

    read_json::<Cart>(response, "Failed to add item").await
}

#[tracing::instrument(skip(client, token), fields(product_id = %product_id))]
pub async fn remove_from_cart(
    client: &ApiClient,
    token: &str,
    product_id: &ProductId,
    mode: PurchaseMode,
) -> Result<Cart> {
    let response = client
        .client
        .delete(client.product_url("/api/cart/item", product_id)?)
        .query(&[("mode", mode.as_str())])
        .bearer_auth(token)
        .send()
        .await
        .map_err(network_error)?;

    read_json::<Cart>(response, "Failed to remove item").await
}

#[tracing::instrument(skip(client, token), fields(product_id = %product_id))]
pub async fn update_cart_item(
    client: &ApiClient,
    token: &str,
    product_id: &ProductId,
    quantity: u32,
    mode: PurchaseMode,
) -> Result<Cart> {
    let response = client
        .client
        .put(client.product_url("/api/cart/item", product_id)?)
        .query(&[("quantity", quantity.to_string()), ("mode", mode.as_str().to_string())])
        .bearer_auth(token)
        .send()
        .await
        .map_err(network_error)?;

    read_json::<Cart>(response, "Failed to update quantity").await
}
