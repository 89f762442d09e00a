//! Wishlist entity model and DTOs.

use giftlist_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `wishlists` table. `user_id` is the owner.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Wishlist {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new wishlist. The owner comes from the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWishlist {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// DTO for updating a wishlist. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateWishlist {
    pub title: Option<String>,
    pub description: Option<String>,
}
