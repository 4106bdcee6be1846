//! # Event Handler
//!
//! Applies async task results to the application state.
//!
//! Each `AppEvent` is handled under a short-lived write lock. Responses that no longer
//! match what the user is looking at (another product, another screen) are dropped here.

use std::time::Instant;

use shared::{Cart, Product, ProductId};

use crate::app::events::CartOrigin;
use crate::app::handlers;
use crate::app::state::{NotificationLevel, Screen};
use crate::app::{App, AppEvent};
use crate::core::error::Result;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoginResult(result) | AppEvent::RegisterResult(result) => {
                handlers::auth::handle_auth_result(self.state.clone(), self.event_tx.clone(), result);
            }
            AppEvent::ProductsLoaded { query, result } => {
                let applied = self.state.write().catalog.apply_results(&query, result);
                if !applied {
                    tracing::debug!(?query, "Dropped stale product list");
                }
            }
            AppEvent::ProductLoaded { id, result } => {
                self.handle_product_loaded(id, result);
            }
            AppEvent::CartUpdated { origin, result } => {
                self.handle_cart_updated(origin, result);
            }
            AppEvent::NegotiationReply { product_id } => {
                let mut state = self.state.write();
                if state.current_screen == Screen::Negotiation && state.negotiation.is_for(&product_id) {
                    state.negotiation.push_reply();
                }
            }
        }
    }
}

impl App {
    fn handle_product_loaded(&mut self, id: ProductId, result: Result<Product>) {
        let mut state = self.state.write();
        if !state.negotiation.is_for(&id) {
            return;
        }

        state.negotiation.loading = false;
        match result {
            Ok(product) => {
                state.negotiation.product = Some(product);
                state.negotiation.error = None;
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "Failed to load product for negotiation");
                state.negotiation.error = Some(e.message().to_string());
            }
        }
    }

    fn handle_cart_updated(&mut self, origin: CartOrigin, result: Result<Cart>) {
        let mut state = self.state.write();
        match (origin, result) {
            (CartOrigin::ProductCard(id), Ok(_)) => {
                state.catalog.adding.remove(&id);
                state.notify(NotificationLevel::Success, "Added to cart");
            }
            (CartOrigin::ProductCard(id), Err(e)) => {
                state.catalog.adding.remove(&id);
                state.catalog.set_card_error(id, e.message().to_string(), Instant::now());
            }
            (CartOrigin::CartScreen, Ok(_)) => {
                state.cart.error = None;
            }
            (CartOrigin::CartScreen, Err(e)) => {
                state.cart.error = Some(e.message().to_string());
            }
            (CartOrigin::Background, Ok(_)) => {}
            (CartOrigin::Background, Err(e)) => {
                tracing::warn!(error = %e, "Background cart refresh failed");
            }
        }
    }
}
