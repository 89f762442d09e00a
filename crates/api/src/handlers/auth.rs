//! Handlers for account registration and login.

use axum::extract::State;
use giftlist_db::models::user::UserResponse;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::Json;
use crate::response::UserEnvelope;
use crate::services::accounts::{self, LoginRequest, RegisterRequest};
use crate::state::AppState;

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<Json<UserEnvelope>> {
    let user = accounts::register(state.store.as_ref(), &input).await?;
    Ok(Json(UserEnvelope { user: user.into() }))
}

/// POST /api/login
///
/// Authenticate with email + password. Returns a bearer access token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let session = accounts::login(state.store.as_ref(), &state.config.jwt, &input).await?;
    Ok(Json(LoginResponse {
        access_token: session.access_token,
        expires_in: session.expires_in,
        user: session.user.into(),
    }))
}
