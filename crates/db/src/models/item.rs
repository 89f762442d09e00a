//! Item entity model and DTOs.

use giftlist_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `items` table.
///
/// `purchased` is true iff at least one purchase references the item. It is
/// only ever set together with a purchase insert and never cleared.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Item {
    pub id: DbId,
    pub wishlist_id: DbId,
    pub name: String,
    pub description: String,
    pub purchased: bool,
    pub created_at: Timestamp,
}

/// DTO for adding an item to a wishlist.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
}
