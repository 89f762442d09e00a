//! Repository for the `purchases` table.

use giftlist_core::types::DbId;
use sqlx::PgPool;

use crate::models::purchase::Purchase;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, item_id, user_id, purchased_at";

/// Records and lists purchases.
pub struct PurchaseRepo;

impl PurchaseRepo {
    /// Record that `user_id` bought `item_id` and flag the item purchased.
    ///
    /// Both writes happen in one transaction. A second purchase of the same
    /// item by the same user fails on `uq_purchases_item_user`, including
    /// when two requests race; the item flag is left untouched in that case.
    /// A missing item fails on `fk_purchases_item`.
    pub async fn record(
        pool: &PgPool,
        item_id: DbId,
        user_id: DbId,
    ) -> Result<Purchase, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO purchases (item_id, user_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let purchase = sqlx::query_as::<_, Purchase>(&insert_query)
            .bind(item_id)
            .bind(user_id)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("UPDATE items SET purchased = true WHERE id = $1")
            .bind(item_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(purchase)
    }

    /// List every purchase of any item in a wishlist.
    pub async fn list_by_wishlist(
        pool: &PgPool,
        wishlist_id: DbId,
    ) -> Result<Vec<Purchase>, sqlx::Error> {
        let query = "SELECT p.id, p.item_id, p.user_id, p.purchased_at
             FROM purchases p
             JOIN items i ON i.id = p.item_id
             WHERE i.wishlist_id = $1
             ORDER BY p.purchased_at, p.id";
        sqlx::query_as::<_, Purchase>(query)
            .bind(wishlist_id)
            .fetch_all(pool)
            .await
    }
}
