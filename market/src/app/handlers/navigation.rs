//! # Navigation Handlers
//!
//! Screen changes behind the session guard, and the purchasing mode switch.

use async_channel::Sender;
use parking_lot::RwLock;
use shared::PurchaseMode;
use std::sync::Arc;

use crate::app::events::{AppEvent, CartOrigin};
use crate::app::state::{AppState, Screen};
use crate::app::tasks::{self, cart::CartOp};

/// Handle screen change with authentication guard
///
/// Internal handler function - use [`crate::app::App::handle_screen_change`] instead.
pub(crate) fn handle_screen_change(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, screen: Screen) {
    let mut guard = state.write();

    let target = guard.guard(screen);
    if target != screen {
        tracing::info!("Access denied: {} requires authentication, redirecting to Login", screen.title());
    }
    guard.current_screen = target;

    match target {
        // Entering the store always fetches afresh
        Screen::Store => guard.catalog.refresh(),
        Screen::Cart => {
            guard.cart.error = None;
            let mode = guard.mode;
            drop(guard);
            tasks::cart::spawn(state, event_tx, CartOrigin::CartScreen, CartOp::Fetch, mode);
        }
        _ => {}
    }
}

/// Switch purchasing mode and open the store.
///
/// The cart of the previous mode is dropped and the new mode's cart fetched.
pub(crate) fn handle_mode_select(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, mode: PurchaseMode) {
    {
        let mut guard = state.write();
        if !guard.is_authenticated() {
            guard.current_screen = Screen::Login;
            return;
        }

        if guard.mode != mode {
            tracing::info!(from = %guard.mode, to = %mode, "Purchasing mode switched");
        }
        guard.mode = mode;
        guard.cart.invalidate();
        guard.catalog.card_errors.clear();
    }

    tasks::cart::spawn(state.clone(), event_tx.clone(), CartOrigin::Background, CartOp::Fetch, mode);
    handle_screen_change(state, event_tx, Screen::Store);
}
