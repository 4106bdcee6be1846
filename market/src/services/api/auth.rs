//! # Authentication Endpoints
//!
//! Handles login (form-encoded) and registration (JSON).

use shared::{LoginForm, RegisterRequest, TokenResponse};

use super::client::{network_error, read_empty, read_json, ApiClient};
use crate::core::error::Result;

/// Login with email or phone number and password.
#[tracing::instrument(skip(client, password))]
pub async fn login(client: &ApiClient, username: &str, password: &str) -> Result<TokenResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let form = LoginForm {
        username: username.to_string(),
        password: password.to_string(),
    };

    let response = client
        .client
        .post(client.url("/api/login"))
        .form(&form)
        .send()
        .await
        .map_err(network_error)?;

    let result = read_json::<TokenResponse>(response, "Login failed").await;
    if result.is_ok() {
        tracing::info!(duration_ms = start.elapsed().as_millis(), "Login successful");
    }
    result
}

/// Register a new account.
#[tracing::instrument(skip(client, request), fields(username = %request.username, role = ?request.role))]
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<()> {
    let response = client
        .client
        .post(client.url("/api/register"))
        .json(request)
        .send()
        .await
        .map_err(network_error)?;

    read_empty(response, "Sign up failed").await?;
    tracing::info!("Account created");
    Ok(())
}
