//! Repository for the `items` table.

use giftlist_core::types::DbId;
use sqlx::PgPool;

use crate::models::item::{CreateItem, Item};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, wishlist_id, name, description, purchased, created_at";

/// Provides CRUD operations for wishlist items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item into `wishlist_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        wishlist_id: DbId,
        input: &CreateItem,
    ) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (wishlist_id, name, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(wishlist_id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find an item by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the items of a wishlist in creation order.
    pub async fn list_by_wishlist(
        pool: &PgPool,
        wishlist_id: DbId,
    ) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM items WHERE wishlist_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(wishlist_id)
            .fetch_all(pool)
            .await
    }
}
