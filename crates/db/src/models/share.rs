//! Share-link entity model and DTOs.

use giftlist_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `shares` table. `expires_at = None` never expires.
#[derive(Debug, Clone, FromRow)]
pub struct Share {
    pub id: DbId,
    pub wishlist_id: DbId,
    pub token: String,
    pub created_at: Timestamp,
    pub expires_at: Option<Timestamp>,
}

/// DTO for persisting a freshly minted share token.
#[derive(Debug, Clone)]
pub struct CreateShare {
    pub wishlist_id: DbId,
    pub token: String,
    pub expires_at: Option<Timestamp>,
}
