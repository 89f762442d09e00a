//! Handlers for the `/wishlists` resource.
//!
//! Every route requires authentication; owner-scoped routes answer 404 for a
//! missing wishlist before they answer 403 for someone else's.

use axum::extract::State;
use axum::http::StatusCode;
use giftlist_core::types::DbId;
use giftlist_db::models::item::CreateItem;
use giftlist_db::models::view::OwnerWishlistView;
use giftlist_db::models::wishlist::{CreateWishlist, UpdateWishlist};
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::{Json, Path, Query};
use crate::middleware::auth::AuthUser;
use crate::response::{ItemEnvelope, WishlistEnvelope, WishlistsEnvelope};
use crate::services::sharing::{self, IssuedShare};
use crate::services::wishlists;
use crate::state::AppState;

/// Query parameters for `POST /wishlists/{id}/share`.
#[derive(Debug, Deserialize)]
pub struct ShareParams {
    /// Link lifetime in hours. Omit for a link that never expires.
    pub expires_in_hours: Option<i64>,
}

// ---------------------------------------------------------------------------
// Wishlists
// ---------------------------------------------------------------------------

/// GET /api/wishlists
pub async fn list_wishlists(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<WishlistsEnvelope>> {
    let wishlists = wishlists::list(state.store.as_ref(), &user.caller()).await?;
    Ok(Json(WishlistsEnvelope { wishlists }))
}

/// POST /api/wishlists
pub async fn create_wishlist(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateWishlist>,
) -> AppResult<Json<WishlistEnvelope>> {
    let wishlist = wishlists::create(state.store.as_ref(), &user.caller(), &input).await?;
    Ok(Json(WishlistEnvelope { wishlist }))
}

/// GET /api/wishlists/{id}
///
/// Owner view: items carry the `purchased` flag but never who bought them.
pub async fn get_wishlist(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<OwnerWishlistView>> {
    let view = wishlists::owner_view(state.store.as_ref(), id, &user.caller()).await?;
    Ok(Json(view))
}

/// PUT /api/wishlists/{id}
pub async fn update_wishlist(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWishlist>,
) -> AppResult<Json<WishlistEnvelope>> {
    let wishlist = wishlists::update(state.store.as_ref(), id, &user.caller(), &input).await?;
    Ok(Json(WishlistEnvelope { wishlist }))
}

/// DELETE /api/wishlists/{id}
pub async fn delete_wishlist(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    wishlists::delete(state.store.as_ref(), id, &user.caller()).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Sub-resources
// ---------------------------------------------------------------------------

/// POST /api/wishlists/{id}/share
pub async fn share_wishlist(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<ShareParams>,
) -> AppResult<Json<IssuedShare>> {
    let issued = sharing::issue(
        state.store.as_ref(),
        &state.config.share_link_base_url,
        id,
        &user.caller(),
        params.expires_in_hours,
    )
    .await?;
    Ok(Json(issued))
}

/// POST /api/wishlists/{id}/items
pub async fn add_item(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateItem>,
) -> AppResult<Json<ItemEnvelope>> {
    let item = wishlists::add_item(state.store.as_ref(), id, &user.caller(), &input).await?;
    Ok(Json(ItemEnvelope { item }))
}
