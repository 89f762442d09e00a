use axum::routing::{get, post};
use axum::Router;

use crate::handlers::wishlists;
use crate::state::AppState;

/// Wishlist routes mounted at `/wishlists`.
///
/// ```text
/// GET    /             -> list_wishlists
/// POST   /             -> create_wishlist
/// GET    /{id}         -> get_wishlist
/// PUT    /{id}         -> update_wishlist
/// DELETE /{id}         -> delete_wishlist
/// POST   /{id}/share   -> share_wishlist
/// POST   /{id}/items   -> add_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(wishlists::list_wishlists).post(wishlists::create_wishlist),
        )
        .route(
            "/{id}",
            get(wishlists::get_wishlist)
                .put(wishlists::update_wishlist)
                .delete(wishlists::delete_wishlist),
        )
        .route("/{id}/share", post(wishlists::share_wishlist))
        .route("/{id}/items", post(wishlists::add_item))
}
