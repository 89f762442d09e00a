use axum::routing::get;
use axum::Router;

use crate::handlers::shared;
use crate::state::AppState;

/// Public share-link routes mounted at `/shared`.
///
/// ```text
/// GET /{token} -> get_shared_wishlist
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{token}", get(shared::get_shared_wishlist))
}
