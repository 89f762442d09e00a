//! Public read access through a share token.

use axum::extract::State;
use giftlist_db::models::view::SharedWishlistView;

use crate::error::AppResult;
use crate::extract::{Json, Path};
use crate::middleware::auth::MaybeAuthUser;
use crate::response::WishlistEnvelope;
use crate::services::sharing;
use crate::state::AppState;

/// GET /api/shared/{token}
///
/// Works without a credential. A signed-in viewer additionally sees
/// `purchased_by: "you"` on the items they bought.
pub async fn get_shared_wishlist(
    viewer: MaybeAuthUser,
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> AppResult<Json<WishlistEnvelope<SharedWishlistView>>> {
    let wishlist = sharing::shared_view(state.store.as_ref(), &token, &viewer.caller()).await?;
    Ok(Json(WishlistEnvelope { wishlist }))
}
