//! # Cart Screen Handlers

use async_channel::Sender;
use parking_lot::RwLock;
use shared::ProductId;
use std::sync::Arc;

use crate::app::events::{AppEvent, CartOrigin};
use crate::app::state::AppState;
use crate::app::tasks::{self, cart::CartOp};

/// Quantity stepper. Going below 1 removes the line.
pub(crate) fn handle_quantity_change(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    product_id: ProductId,
    new_quantity: i64,
) {
    let op = if new_quantity < 1 {
        CartOp::Remove { product_id }
    } else {
        match u32::try_from(new_quantity) {
            Ok(quantity) => CartOp::Update { product_id, quantity },
            Err(_) => {
                tracing::warn!(new_quantity, "Quantity out of range, ignoring");
                return;
            }
        }
    };
    start(state, event_tx, op);
}

pub(crate) fn handle_remove(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, product_id: ProductId) {
    start(state, event_tx, CartOp::Remove { product_id });
}

fn start(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, op: CartOp) {
    let mode = {
        let mut guard = state.write();
        // One mutation at a time from this screen
        if guard.cart.is_busy() {
            tracing::debug!(?op, "Cart busy, ignoring");
            return;
        }
        guard.cart.error = None;
        guard.mode
    };
    tasks::cart::spawn(state, event_tx, CartOrigin::CartScreen, op, mode);
}
