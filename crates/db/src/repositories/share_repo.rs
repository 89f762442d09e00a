//! Repository for the `shares` table.

use sqlx::PgPool;

use crate::models::share::{CreateShare, Share};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, wishlist_id, token, created_at, expires_at";

/// Persists and resolves share tokens.
pub struct ShareRepo;

impl ShareRepo {
    /// Insert a new share, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateShare) -> Result<Share, sqlx::Error> {
        let query = format!(
            "INSERT INTO shares (wishlist_id, token, expires_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Share>(&query)
            .bind(input.wishlist_id)
            .bind(&input.token)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find a share by exact token match, expired or not.
    pub async fn find_by_token(pool: &PgPool, token: &str) -> Result<Option<Share>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shares WHERE token = $1");
        sqlx::query_as::<_, Share>(&query)
            .bind(token)
            .fetch_optional(pool)
            .await
    }
}
