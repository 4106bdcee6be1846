//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, async tasks and
//! application state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - called every frame                    │   │
//! │  │  - handle_event() - applies async results            │   │
//! │  │  - handle_*() - user action handlers                 │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - session, cart, catalog, negotiation               │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio)                            │
//! │  - auth::login / register                                   │
//! │  - catalog::fetch_products / fetch_product                  │
//! │  - cart::spawn (fetch, add, remove, update)                 │
//! │  - negotiation::schedule_reply                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tasks never hold the state lock across an `.await`. Their results come back as
//! [`AppEvent`]s and are applied in [`App::on_tick`].
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use bep_market::app::App;
//! use bep_market::config::ClientConfig;
//! use bep_market::services::{ApiClient, FileTokenStore};
//!
//! let config = ClientConfig::from_env();
//! let api = Arc::new(ApiClient::new(&config.api_base_url));
//! let tokens = Arc::new(FileTokenStore::new(&config.token_path));
//! let mut app = App::new(config, api, tokens);
//!
//! // In the egui update loop:
//! app.on_tick();
//! ```

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use events::{AppEvent, CartOrigin};
pub use state::*;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::{Category, ProductId, PurchaseMode, Role};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::ClientConfig;
use crate::core::service::{ApiService, TokenStore};

/// Main application orchestrator.
///
/// Async tasks send results back to the main thread as [`AppEvent`] messages through an
/// unbounded channel; [`App::on_tick`] drains them every frame.
pub struct App {
    /// Shared application state.
    ///
    /// Hold locks for as short as possible: the UI thread reads every frame.
    pub state: Arc<RwLock<AppState>>,

    /// Receives results from async tasks. Polled in `on_tick()` with `try_recv()`.
    pub event_rx: Receiver<AppEvent>,

    /// Cloned into every spawned task.
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create the application and restore a saved session if there is one.
    ///
    /// With a valid stored token the user lands on mode selection and the retail cart is
    /// fetched in the background; otherwise the welcome screen is shown.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: ClientConfig, api_client: Arc<dyn ApiService>, token_store: Arc<dyn TokenStore>) -> Self {
        let (event_tx, event_rx) = unbounded();

        let mut state = AppState::new(config, api_client, token_store);
        let restored = state.session.restore();
        if restored {
            state.current_screen = Screen::ModeSelection;
        }

        let app = Self {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
        };

        if restored {
            tasks::cart::spawn(
                app.state.clone(),
                app.event_tx.clone(),
                CartOrigin::Background,
                tasks::cart::CartOp::Fetch,
                PurchaseMode::Retail,
            );
        }

        tracing::info!(restored, "Application initialized");
        app
    }

    /// Called every frame: apply finished async work, then run catalog upkeep.
    pub fn on_tick(&mut self) {
        let mut events_processed = 0u32;
        while let Ok(event) = self.event_rx.try_recv() {
            events_processed += 1;
            self.handle_event(event);
        }
        if events_processed > 0 {
            tracing::trace!(events_processed, "on_tick: processed events");
        }

        handlers::catalog::poll_catalog(self.state.clone(), self.event_tx.clone(), Instant::now());
    }

    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    /// How soon the UI should repaint without input: sooner while a search is settling
    /// or requests are in flight.
    pub fn repaint_hint(&self) -> Duration {
        let state = self.state.read();
        if let Some(remaining) = state.catalog.debounce_remaining(Instant::now()) {
            return remaining.max(Duration::from_millis(16));
        }
        let waiting = state.auth.is_loading()
            || state.cart.is_busy()
            || state.catalog.loading
            || state.negotiation.loading
            || !state.catalog.adding.is_empty()
            || !state.catalog.card_errors.is_empty()
            || state.current_screen == Screen::Negotiation;
        if waiting {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(500)
        }
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    /// Handle login button click
    pub fn handle_login_click(&mut self, username: String, password: String) {
        handlers::auth::handle_login_click(self.state.clone(), self.event_tx.clone(), username, password);
    }

    /// Handle sign up button click
    pub fn handle_register_click(&mut self, full_name: String, username: String, password: String, role: Role) {
        handlers::auth::handle_register_click(
            self.state.clone(),
            self.event_tx.clone(),
            full_name,
            username,
            password,
            role,
        );
    }

    pub fn handle_switch_to_login(&mut self) {
        handlers::auth::handle_switch_to_login(self.state.clone());
    }

    pub fn handle_switch_to_register(&mut self) {
        handlers::auth::handle_switch_to_register(self.state.clone());
    }

    pub fn handle_logout(&mut self) {
        handlers::auth::handle_logout(self.state.clone());
    }

    /// Navigate, subject to the session guard
    pub fn handle_screen_change(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(self.state.clone(), self.event_tx.clone(), screen);
    }

    pub fn handle_mode_select(&mut self, mode: PurchaseMode) {
        handlers::navigation::handle_mode_select(self.state.clone(), self.event_tx.clone(), mode);
    }

    pub fn handle_search_change(&mut self, text: String) {
        handlers::catalog::handle_search_change(self.state.clone(), text);
    }

    pub fn handle_category_toggle(&mut self, category: Category) {
        handlers::catalog::handle_category_toggle(self.state.clone(), category);
    }

    pub fn handle_price_filter_change(&mut self, min_price: String, max_price: String) {
        handlers::catalog::handle_price_filter_change(self.state.clone(), min_price, max_price);
    }

    pub fn handle_add_to_cart(&mut self, product_id: ProductId) {
        handlers::catalog::handle_add_to_cart(self.state.clone(), self.event_tx.clone(), product_id);
    }

    pub fn handle_quantity_change(&mut self, product_id: ProductId, new_quantity: i64) {
        handlers::cart::handle_quantity_change(self.state.clone(), self.event_tx.clone(), product_id, new_quantity);
    }

    pub fn handle_remove_from_cart(&mut self, product_id: ProductId) {
        handlers::cart::handle_remove(self.state.clone(), self.event_tx.clone(), product_id);
    }

    pub fn handle_open_negotiation(&mut self, product_id: ProductId) {
        handlers::negotiation::handle_open_negotiation(self.state.clone(), self.event_tx.clone(), product_id);
    }

    pub fn handle_draft_change(&mut self, draft: String) {
        handlers::negotiation::handle_draft_change(self.state.clone(), draft);
    }

    pub fn handle_send_message(&mut self) {
        handlers::negotiation::handle_send_message(self.state.clone(), self.event_tx.clone());
    }
}
