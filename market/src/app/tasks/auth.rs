//! # Authentication Tasks

use std::sync::Arc;

use async_channel::Sender;
use shared::RegisterRequest;

use crate::app::events::AppEvent;
use crate::core::service::ApiService;

pub(crate) fn login(api_client: Arc<dyn ApiService>, event_tx: Sender<AppEvent>, username: String, password: String) {
    tokio::spawn(async move {
        let result = api_client.login(&username, &password).await;
        let _ = event_tx.send(AppEvent::LoginResult(result)).await;
    });
}

/// Register, then log in with the same credentials.
pub(crate) fn register(api_client: Arc<dyn ApiService>, event_tx: Sender<AppEvent>, request: RegisterRequest) {
    tokio::spawn(async move {
        let result = match api_client.register(&request).await {
            Ok(()) => api_client.login(&request.username, &request.password).await,
            Err(e) => Err(e),
        };
        let _ = event_tx.send(AppEvent::RegisterResult(result)).await;
    });
}
