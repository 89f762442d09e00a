//! Registration and password login.

use std::sync::LazyLock;

use giftlist_core::error::CoreError;
use giftlist_core::validation::{validate_email, validate_password, validate_user_name};
use giftlist_db::models::user::{CreateUser, User};
use giftlist_db::store::WishlistStore;
use serde::Deserialize;

use crate::auth::jwt::{generate_access_token, JwtConfig};
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};

/// Returned for both an unknown email and a wrong password.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Verified against when the email is unknown so both login failures cost one
/// Argon2 verification.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("giftlist-unknown-account").ok());

/// Request body for `POST /api/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for `POST /api/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// A successful login.
#[derive(Debug)]
pub struct Session {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: User,
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Create a new account. Fails with a unique violation if the email is taken.
pub async fn register(store: &dyn WishlistStore, input: &RegisterRequest) -> AppResult<User> {
    let name = input.name.trim();
    let email = normalize_email(&input.email);

    validate_user_name(name)?;
    validate_email(&email)?;
    validate_password(&input.password)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = store
        .create_user(&CreateUser {
            name: name.to_string(),
            email,
            password_hash,
        })
        .await?;

    tracing::info!(user_id = %user.id, "User registered");
    Ok(user)
}

/// Verify credentials and mint an access token.
pub async fn login(
    store: &dyn WishlistStore,
    jwt: &JwtConfig,
    input: &LoginRequest,
) -> AppResult<Session> {
    if input.email.trim().is_empty() || input.password.is_empty() {
        return Err(CoreError::Validation("Email and password are required".into()).into());
    }

    let Some(user) = store
        .find_user_by_email(&normalize_email(&input.email))
        .await?
    else {
        if let Some(hash) = DUMMY_HASH.as_deref() {
            let _ = verify_password(&input.password, hash);
        }
        return Err(CoreError::Unauthorized(INVALID_CREDENTIALS.into()).into());
    };

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::debug!(user_id = %user.id, "Rejected login with wrong password");
        return Err(CoreError::Unauthorized(INVALID_CREDENTIALS.into()).into());
    }

    let access_token = generate_access_token(user.id, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Session {
        access_token,
        expires_in: jwt.access_token_expiry_mins * 60,
        user,
    })
}
