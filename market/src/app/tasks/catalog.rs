//! # Catalog Tasks
//!
//! Product list and single product fetches. Results go back through the event channel,
//! tagged with what was asked for so stale answers can be recognised.

use std::sync::Arc;

use async_channel::Sender;
use shared::{ProductId, ProductQuery};

use crate::app::events::AppEvent;
use crate::core::service::ApiService;

pub(crate) fn fetch_products(api_client: Arc<dyn ApiService>, event_tx: Sender<AppEvent>, query: ProductQuery) {
    tokio::spawn(async move {
        let result = api_client.list_products(&query).await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, ?query, "Product list fetch failed");
        }
        let _ = event_tx.send(AppEvent::ProductsLoaded { query, result }).await;
    });
}

pub(crate) fn fetch_product(api_client: Arc<dyn ApiService>, event_tx: Sender<AppEvent>, token: String, id: ProductId) {
    tokio::spawn(async move {
        let result = api_client.get_product(&token, &id).await;
        let _ = event_tx.send(AppEvent::ProductLoaded { id, result }).await;
    });
}
