pub mod auth;
pub mod health;
pub mod items;
pub mod shared;
pub mod wishlists;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /register                                        register (public)
/// /login                                           login (public)
///
/// /wishlists                                       list, create
/// /wishlists/{id}                                  get (owner view), update, delete
/// /wishlists/{id}/share                            issue share link (POST)
/// /wishlists/{id}/items                            add item (POST)
///
/// /items/{id}/purchase                             mark purchased (PUT)
///
/// /shared/{token}                                  shared view (optional auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/wishlists", wishlists::router())
        .nest("/items", items::router())
        .nest("/shared", shared::router())
}
