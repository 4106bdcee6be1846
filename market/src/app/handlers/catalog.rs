//! # Catalog Handlers
//!
//! Filter edits, the per-frame fetch trigger, and add-to-cart from a product card.

use async_channel::Sender;
use parking_lot::RwLock;
use shared::{Category, ProductId};
use std::sync::Arc;
use std::time::Instant;

use crate::app::events::{AppEvent, CartOrigin};
use crate::app::state::{AppState, Screen};
use crate::app::tasks::{self, cart::CartOp};

pub(crate) fn handle_search_change(state: Arc<RwLock<AppState>>, text: String) {
    state.write().catalog.set_search(text, Instant::now());
}

pub(crate) fn handle_category_toggle(state: Arc<RwLock<AppState>>, category: Category) {
    state.write().catalog.toggle_category(category);
}

pub(crate) fn handle_price_filter_change(state: Arc<RwLock<AppState>>, min_price: String, max_price: String) {
    let mut state = state.write();
    state.catalog.filters.min_price = min_price;
    state.catalog.filters.max_price = max_price;
}

/// Per-frame catalog upkeep while the store is open: settle the search debounce, expire
/// card errors and fetch when the effective query changed.
pub(crate) fn poll_catalog(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, now: Instant) {
    let mut state = state.write();
    if state.current_screen != Screen::Store {
        return;
    }

    if let Some(query) = state.catalog.tick(now) {
        tracing::debug!(?query, "Fetching products");
        state.catalog.mark_requested(query.clone());
        tasks::catalog::fetch_products(state.api_client.clone(), event_tx, query);
    }
}

/// Add one unit from a product card ("Add to Cart" or "Contact Seller").
pub(crate) fn handle_add_to_cart(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, product_id: ProductId) {
    let mode = {
        let mut guard = state.write();
        if guard.cart.is_busy() || guard.catalog.adding.contains(&product_id) {
            return;
        }
        if !guard.is_authenticated() {
            guard.current_screen = Screen::Login;
            return;
        }
        guard.catalog.card_errors.remove(&product_id);
        guard.catalog.adding.insert(product_id.clone());
        guard.mode
    };

    tasks::cart::spawn(
        state,
        event_tx,
        CartOrigin::ProductCard(product_id.clone()),
        CartOp::Add { product_id, quantity: 1 },
        mode,
    );
}
