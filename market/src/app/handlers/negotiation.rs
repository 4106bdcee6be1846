//! # Negotiation Handlers
//!
//! The chat is local only: messages never leave the client and the assistant answers
//! with one scripted reply after a delay.

use async_channel::Sender;
use parking_lot::RwLock;
use shared::ProductId;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, NegotiationState, Screen};
use crate::app::tasks;

/// Open the negotiation screen for `product_id` with a fresh transcript.
pub(crate) fn handle_open_negotiation(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    product_id: ProductId,
) {
    let mut guard = state.write();
    let Some(token) = guard.session.token().map(str::to_string) else {
        tracing::info!("Negotiation requires authentication, redirecting to Login");
        guard.current_screen = Screen::Login;
        return;
    };

    tracing::info!(%product_id, "Opening negotiation");
    guard.negotiation = NegotiationState::open(product_id.clone());
    guard.current_screen = Screen::Negotiation;
    let api_client = guard.api_client.clone();
    drop(guard);

    tasks::catalog::fetch_product(api_client, event_tx, token, product_id);
}

pub(crate) fn handle_draft_change(state: Arc<RwLock<AppState>>, draft: String) {
    state.write().negotiation.draft = draft;
}

/// Send the current draft and schedule the assistant's reply.
pub(crate) fn handle_send_message(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let mut guard = state.write();
    let Some(product_id) = guard.negotiation.product_id.clone() else {
        return;
    };

    let draft = std::mem::take(&mut guard.negotiation.draft);
    if !guard.negotiation.push_user_message(&draft) {
        return;
    }
    let delay = guard.config.negotiation_reply_delay;
    drop(guard);

    tasks::negotiation::schedule_reply(event_tx, product_id, delay);
}
