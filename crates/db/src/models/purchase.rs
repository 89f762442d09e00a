//! Purchase entity model.

use giftlist_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `purchases` table: one user's claim on one item.
///
/// At most one row exists per `(item_id, user_id)`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Purchase {
    pub id: DbId,
    pub item_id: DbId,
    pub user_id: DbId,
    pub purchased_at: Timestamp,
}
