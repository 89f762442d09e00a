//! Handlers for the `/items` resource.

use axum::extract::State;
use giftlist_core::types::DbId;

use crate::error::AppResult;
use crate::extract::{Json, Path};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::services::ledger;
use crate::state::AppState;

/// PUT /api/items/{id}/purchase
///
/// Returns 400 with code `CONFLICT` if the caller already bought this item.
pub async fn purchase_item(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    ledger::record_purchase(state.store.as_ref(), id, &user.caller()).await?;
    Ok(Json(MessageResponse {
        message: "Item marked as purchased",
    }))
}
