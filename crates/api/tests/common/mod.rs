#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use giftlist_api::auth::jwt::JwtConfig;
use giftlist_api::config::ServerConfig;
use giftlist_api::router::build_app_router;
use giftlist_api::state::AppState;
use giftlist_db::store::{MemoryStore, WishlistStore};

pub const SHARE_BASE_URL: &str = "http://localhost:5173";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        share_link_base_url: SHARE_BASE_URL.to_string(),
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router backed by a fresh in-memory store.
///
/// Uses the same [`build_app_router`] as `main.rs`, so the middleware stack
/// (CORS, request ID, timeout, tracing, panic recovery) is exercised too.
/// The store handle is returned for seeding and fault injection.
pub fn build_test_app() -> (Router, Arc<MemoryStore>) {
    let config = test_config();
    let memory = Arc::new(MemoryStore::new());
    let store: Arc<dyn WishlistStore> = memory.clone();

    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

    (build_app_router(state, &config), memory)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// POST a raw body with an optional content type, for malformed-input cases.
pub async fn post_raw(
    app: Router,
    uri: &str,
    body: &'static str,
    content_type: Option<&str>,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    app.oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn put_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), None).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Register an account through the API and log it in.
///
/// Returns `(user_id, access_token)`.
pub async fn register_and_login(app: &Router, name: &str) -> (String, String) {
    let email = format!("{}@test.com", name.to_lowercase());
    let password = "test_password_123!";

    let response = post_json(
        app.clone(),
        "/api/register",
        serde_json::json!({ "name": name, "email": email, "password": password }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let response = post_json(
        app.clone(),
        "/api/login",
        serde_json::json!({ "email": email, "password": password }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let json = body_json(response).await;

    (
        json["user"]["id"].as_str().unwrap().to_string(),
        json["access_token"].as_str().unwrap().to_string(),
    )
}

/// Create a wishlist through the API and return its id.
pub async fn create_wishlist(app: &Router, token: &str, title: &str) -> String {
    let response = post_json_auth(
        app.clone(),
        "/api/wishlists",
        serde_json::json!({ "title": title, "description": "" }),
        token,
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await["wishlist"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Add an item through the API and return its id.
pub async fn add_item(app: &Router, token: &str, wishlist_id: &str, name: &str) -> String {
    let response = post_json_auth(
        app.clone(),
        &format!("/api/wishlists/{wishlist_id}/items"),
        serde_json::json!({ "name": name, "description": "" }),
        token,
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await["item"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Issue a share link and return the response JSON.
pub async fn share(app: &Router, token: &str, wishlist_id: &str) -> serde_json::Value {
    let response = post_auth(
        app.clone(),
        &format!("/api/wishlists/{wishlist_id}/share"),
        token,
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await
}
