//! Repository for the `wishlists` table.

use giftlist_core::types::DbId;
use sqlx::PgPool;

use crate::models::wishlist::{CreateWishlist, UpdateWishlist, Wishlist};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, title, description, created_at";

/// Provides CRUD operations for wishlists.
pub struct WishlistRepo;

impl WishlistRepo {
    /// Insert a new wishlist owned by `owner_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateWishlist,
    ) -> Result<Wishlist, sqlx::Error> {
        let query = format!(
            "INSERT INTO wishlists (user_id, title, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Wishlist>(&query)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a wishlist by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Wishlist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM wishlists WHERE id = $1");
        sqlx::query_as::<_, Wishlist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's wishlists, most recently created first.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Wishlist>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM wishlists WHERE user_id = $1 ORDER BY created_at DESC, id"
        );
        sqlx::query_as::<_, Wishlist>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Update a wishlist. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWishlist,
    ) -> Result<Option<Wishlist>, sqlx::Error> {
        let query = format!(
            "UPDATE wishlists SET
                title = COALESCE($2, title),
                description = COALESCE($3, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Wishlist>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a wishlist and, by cascade, its items, purchases and shares.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM wishlists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
