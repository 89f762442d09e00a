//! Recording gift purchases.
//!
//! At most one purchase exists per (item, user). Concurrent duplicates are
//! serialized by the store's unique constraint; the loser gets a conflict and
//! no second row is written.

use giftlist_core::access::{authorize, Action, Caller};
use giftlist_core::error::CoreError;
use giftlist_core::types::DbId;
use giftlist_db::error::{constraints, StoreError};
use giftlist_db::models::purchase::Purchase;
use giftlist_db::store::WishlistStore;

use crate::error::{AppError, AppResult};

/// Message returned when the caller already bought the item.
pub const ALREADY_PURCHASED: &str = "Item already purchased by you";

/// Mark `item_id` purchased by `caller`.
pub async fn record_purchase(
    store: &dyn WishlistStore,
    item_id: DbId,
    caller: &Caller,
) -> AppResult<Purchase> {
    authorize(caller, Action::PurchaseItem).into_result()?;
    let user_id = caller.require_user()?;

    store
        .find_item(item_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Item",
            id: item_id,
        })?;

    let purchase = store
        .record_purchase(item_id, user_id)
        .await
        .map_err(|err| purchase_insert_error(err, item_id))?;

    tracing::info!(item_id = %item_id, purchase_id = %purchase.id, "Item purchased");
    Ok(purchase)
}

/// Translate the constraint failures a purchase insert can hit.
///
/// The item may vanish between the lookup and the insert when its wishlist
/// is deleted concurrently; that reads as 404 rather than 500.
fn purchase_insert_error(err: StoreError, item_id: DbId) -> AppError {
    if err.is_unique_violation(constraints::UQ_PURCHASES_ITEM_USER) {
        tracing::debug!(item_id = %item_id, "Duplicate purchase rejected");
        CoreError::Conflict(ALREADY_PURCHASED.into()).into()
    } else if err.is_foreign_key_violation(constraints::FK_PURCHASES_ITEM) {
        CoreError::NotFound {
            entity: "Item",
            id: item_id,
        }
        .into()
    } else {
        err.into()
    }
}
