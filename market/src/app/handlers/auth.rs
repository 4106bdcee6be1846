//! # Authentication Handlers
//!
//! Handlers for login, registration, logout, and applying an issued token.

use async_channel::Sender;
use parking_lot::RwLock;
use shared::{PurchaseMode, RegisterRequest, Role, TokenResponse};
use std::sync::Arc;

use crate::app::events::{AppEvent, CartOrigin};
use crate::app::state::{AppState, AuthState, NotificationLevel, Screen};
use crate::app::tasks;
use crate::core::error::Result;
use crate::utils::validation::validate_required;

/// Handle login button click
///
/// Internal handler function - use [`crate::app::App::handle_login_click`] instead.
pub(crate) fn handle_login_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    username: String,
    password: String,
) {
    let mut guard = state.write();
    if guard.auth.is_loading() {
        return;
    }

    let check = validate_required(&username, "Email or phone number")
        .and_then(|()| validate_required(&password, "Password"));
    if let Err(e) = check {
        tracing::debug!(error = %e, "Login form rejected");
        guard.auth.set_error(Some(e.message().to_string()));
        return;
    }

    guard.auth.set_error(None);
    guard.auth.set_loading(true);
    let api_client = guard.api_client.clone();
    drop(guard);

    tracing::info!("Login requested");
    tasks::auth::login(api_client, event_tx, username.trim().to_string(), password);
}

/// Handle sign up button click
///
/// Internal handler function - use [`crate::app::App::handle_register_click`] instead.
pub(crate) fn handle_register_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    full_name: String,
    username: String,
    password: String,
    role: Role,
) {
    let mut guard = state.write();
    if guard.auth.is_loading() {
        return;
    }

    let check = validate_required(&full_name, "Full name")
        .and_then(|()| validate_required(&username, "Email or phone number"))
        .and_then(|()| validate_required(&password, "Password"));
    if let Err(e) = check {
        tracing::debug!(error = %e, "Sign up form rejected");
        guard.auth.set_error(Some(e.message().to_string()));
        return;
    }

    guard.auth.set_error(None);
    guard.auth.set_loading(true);
    let api_client = guard.api_client.clone();
    drop(guard);

    let request = RegisterRequest {
        username: username.trim().to_string(),
        password,
        role,
        full_name: full_name.trim().to_string(),
    };
    tracing::info!(role = ?request.role, "Registration requested");
    tasks::auth::register(api_client, event_tx, request);
}

/// Apply the outcome of a login (or registration + login).
///
/// On success the session starts, the retail cart is fetched and the user moves on to
/// mode selection. On failure the message lands on the auth form.
pub(crate) fn handle_auth_result(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    result: Result<TokenResponse>,
) {
    let mut guard = state.write();
    guard.auth.set_loading(false);

    let token = match result {
        Ok(response) => response.access_token,
        Err(e) => {
            tracing::warn!(error = %e, "Authentication failed");
            guard.auth.set_error(Some(e.message().to_string()));
            return;
        }
    };

    let name = match guard.session.login(&token) {
        Ok(session) => session.user.display_name().to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "Rejected access token");
            guard.auth.set_error(Some(e.message().to_string()));
            return;
        }
    };

    guard.reset_session_state();
    guard.notify(NotificationLevel::Info, format!("Signed in as {}", name));
    guard.current_screen = Screen::ModeSelection;
    drop(guard);

    tasks::cart::spawn(state, event_tx, CartOrigin::Background, tasks::cart::CartOp::Fetch, PurchaseMode::Retail);
}

/// Log out: drop the session, token, cart and per-session view state.
pub(crate) fn handle_logout(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.session.logout();
    state.reset_session_state();
    state.current_screen = Screen::Login;
}

pub(crate) fn handle_switch_to_login(state: Arc<RwLock<AppState>>) {
    state.write().auth = AuthState::login();
}

pub(crate) fn handle_switch_to_register(state: Arc<RwLock<AppState>>) {
    state.write().auth = AuthState::register();
}
