//! # Cart Store Operations
//!
//! Each operation is one round-trip: count the request in flight, call the API without
//! holding the state lock, count it out whatever the outcome, and on success replace the
//! stored snapshot with the server's unless a later request already did. Errors go back
//! to the caller untouched.

use std::future::Future;
use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::{Cart, ProductId, PurchaseMode};

use crate::app::events::{AppEvent, CartOrigin};
use crate::app::state::AppState;
use crate::core::error::Result;
use crate::core::service::ApiService;

/// A cart request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOp {
    Fetch,
    Add { product_id: ProductId, quantity: u32 },
    Remove { product_id: ProductId },
    Update { product_id: ProductId, quantity: u32 },
}

async fn round_trip<F, Fut>(state: &Arc<RwLock<AppState>>, mode: PurchaseMode, call: F) -> Result<Cart>
where
    F: FnOnce(Arc<dyn ApiService>, String) -> Fut,
    Fut: Future<Output = Result<Cart>>,
{
    let (api_client, token, seq) = {
        let mut state = state.write();
        let token = state.session.require_token()?;
        let seq = state.cart.begin();
        (state.api_client.clone(), token, seq)
    };

    let result = call(api_client, token).await;

    let mut state = state.write();
    state.cart.finish();
    if let Ok(cart) = &result {
        if !state.is_authenticated() {
            tracing::debug!("Session ended while cart request was in flight, dropping snapshot");
        } else if state.mode != mode {
            tracing::debug!(%mode, active = %state.mode, "Dropping cart snapshot for inactive mode");
        } else {
            state.cart.store(seq, mode, cart.clone());
        }
    }
    result
}

pub(crate) async fn fetch(state: &Arc<RwLock<AppState>>, mode: PurchaseMode) -> Result<Cart> {
    round_trip(state, mode, |api, token| async move { api.get_cart(&token, mode).await }).await
}

pub(crate) async fn add(
    state: &Arc<RwLock<AppState>>,
    product_id: ProductId,
    quantity: u32,
    mode: PurchaseMode,
) -> Result<Cart> {
    round_trip(state, mode, |api, token| async move {
        api.add_to_cart(&token, &product_id, quantity, mode).await
    })
    .await
}

pub(crate) async fn remove(state: &Arc<RwLock<AppState>>, product_id: ProductId, mode: PurchaseMode) -> Result<Cart> {
    round_trip(state, mode, |api, token| async move {
        api.remove_from_cart(&token, &product_id, mode).await
    })
    .await
}

pub(crate) async fn update_quantity(
    state: &Arc<RwLock<AppState>>,
    product_id: ProductId,
    quantity: u32,
    mode: PurchaseMode,
) -> Result<Cart> {
    round_trip(state, mode, |api, token| async move {
        api.update_cart_item(&token, &product_id, quantity, mode).await
    })
    .await
}

pub(crate) async fn run(state: &Arc<RwLock<AppState>>, op: CartOp, mode: PurchaseMode) -> Result<Cart> {
    match op {
        CartOp::Fetch => fetch(state, mode).await,
        CartOp::Add { product_id, quantity } => add(state, product_id, quantity, mode).await,
        CartOp::Remove { product_id } => remove(state, product_id, mode).await,
        CartOp::Update { product_id, quantity } => update_quantity(state, product_id, quantity, mode).await,
    }
}

/// Run `op` in the background and report the outcome to `origin`.
pub(crate) fn spawn(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    origin: CartOrigin,
    op: CartOp,
    mode: PurchaseMode,
) {
    tokio::spawn(async move {
        let result = run(&state, op, mode).await;
        let _ = event_tx.send(AppEvent::CartUpdated { origin, result }).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::core::error::AppError;
    use crate::test_support::{session_token, MemoryTokenStore, MockApiService, MockCall};
    use rust_decimal::Decimal;
    use std::time::Duration;

    fn logged_in(api: Arc<MockApiService>) -> Arc<RwLock<AppState>> {
        let mut state = AppState::new(ClientConfig::default(), api, Arc::new(MemoryTokenStore::default()));
        state.session.login(&session_token("ravi@example.in", "Ravi Kumar")).unwrap();
        Arc::new(RwLock::new(state))
    }

    #[tokio::test]
    async fn test_add_then_remove_restores_total() {
        let api = Arc::new(MockApiService::new());
        let state = logged_in(api.clone());
        let mode = PurchaseMode::Retail;

        add(&state, ProductId::Number(2), 1, mode).await.unwrap();
        let before = fetch(&state, mode).await.unwrap().total_price;
        assert_eq!(before, Decimal::from(540));

        let added = add(&state, ProductId::Number(1), 3, mode).await.unwrap();
        assert_eq!(added.total_price, Decimal::from(540 + 3 * 800));

        let removed = remove(&state, ProductId::Number(1), mode).await.unwrap();
        assert_eq!(removed.total_price, before);
        assert_eq!(state.read().current_cart().map(|c| c.total_price), Some(before));
        assert!(!state.read().cart.is_busy());
    }

    #[tokio::test]
    async fn test_mode_switch_reflects_mode_pricing() {
        let api = Arc::new(MockApiService::new());
        let state = logged_in(api.clone());

        add(&state, ProductId::Number(1), 2, PurchaseMode::Retail).await.unwrap();
        add(&state, ProductId::Number(1), 2, PurchaseMode::Wholesale).await.unwrap();
        assert_eq!(state.read().cart.badge_count(PurchaseMode::Retail), 2);

        {
            let mut state = state.write();
            state.mode = PurchaseMode::Wholesale;
            state.cart.invalidate();
        }
        assert!(state.read().current_cart().is_none());

        let wholesale = fetch(&state, PurchaseMode::Wholesale).await.unwrap();
        assert_eq!(wholesale.items[0].price, Decimal::from(720));
        assert_eq!(wholesale.total_price, Decimal::from(1440));
        assert_eq!(state.read().current_cart(), Some(&wholesale));
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_snapshot() {
        let api = Arc::new(MockApiService::new());
        let state = logged_in(api.clone());
        let mode = PurchaseMode::Retail;

        let original = add(&state, ProductId::Number(3), 2, mode).await.unwrap();

        api.fail(MockCall::UpdateCartItem, AppError::Api("Insufficient stock".into()));
        let err = update_quantity(&state, ProductId::Number(3), 50, mode).await.unwrap_err();
        assert_eq!(err.message(), "Insufficient stock");

        api.fail(MockCall::RemoveFromCart, AppError::Api("Failed to remove item".into()));
        assert!(remove(&state, ProductId::Number(3), mode).await.is_err());

        let state = state.read();
        assert_eq!(state.current_cart(), Some(&original));
        assert!(!state.cart.is_busy());
    }

    #[tokio::test]
    async fn test_requires_session_and_leaves_busy_alone() {
        let api = Arc::new(MockApiService::new());
        let state = Arc::new(RwLock::new(AppState::new(
            ClientConfig::default(),
            api.clone(),
            Arc::new(MemoryTokenStore::default()),
        )));

        let err = fetch(&state, PurchaseMode::Retail).await.unwrap_err();
        assert!(matches!(err, AppError::Session(_)));
        assert!(!state.read().cart.is_busy());
        assert_eq!(api.call_count(MockCall::GetCart), 0);
    }

    #[tokio::test]
    async fn test_late_fetch_does_not_overwrite_newer_snapshot() {
        let api = Arc::new(MockApiService::new());
        let state = logged_in(api.clone());
        let mode = PurchaseMode::Retail;
        add(&state, ProductId::Number(1), 2, mode).await.unwrap();

        api.delay_next(MockCall::GetCart, Duration::from_millis(50));
        let slow = tokio::spawn({
            let state = state.clone();
            async move { fetch(&state, mode).await }
        });
        tokio::time::sleep(Duration::from_millis(10)).await;

        fetch(&state, mode).await.unwrap();
        assert!(state.read().cart.is_busy(), "slow fetch is still in flight");

        update_quantity(&state, ProductId::Number(1), 5, mode).await.unwrap();

        let stale = slow.await.unwrap().unwrap();
        assert_eq!(stale.items[0].quantity, 2);

        let state = state.read();
        assert_eq!(state.current_cart().map(|cart| cart.items[0].quantity), Some(5));
        assert!(!state.cart.is_busy());
    }

    #[tokio::test]
    async fn test_inactive_mode_response_is_not_stored() {
        let api = Arc::new(MockApiService::new());
        let state = logged_in(api.clone());

        fetch(&state, PurchaseMode::Wholesale).await.unwrap();
        assert!(state.read().cart.snapshot_for(PurchaseMode::Wholesale).is_none());
    }
}
