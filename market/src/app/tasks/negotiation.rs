//! # Negotiation Tasks
//!
//! The assistant is scripted: one fixed reply after a fixed delay.

use std::time::Duration;

use async_channel::Sender;
use shared::ProductId;

use crate::app::events::AppEvent;

pub(crate) fn schedule_reply(event_tx: Sender<AppEvent>, product_id: ProductId, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = event_tx.send(AppEvent::NegotiationReply { product_id }).await;
    });
}
