use axum::routing::put;
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// Item routes mounted at `/items`.
///
/// ```text
/// PUT /{id}/purchase -> purchase_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/purchase", put(items::purchase_item))
}
